//! Partial updates applied by the roster's edit operation

use crate::entities::RecordKind;

/// New value for the variant-specific field
#[derive(Debug, Clone, PartialEq)]
pub enum DetailUpdate {
    Major(String),
    ThesisTopic(String),
}

impl DetailUpdate {
    /// Variant this field belongs to
    pub fn kind(&self) -> RecordKind {
        match self {
            DetailUpdate::Major(_) => RecordKind::Undergraduate,
            DetailUpdate::ThesisTopic(_) => RecordKind::Graduate,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            DetailUpdate::Major(value) | DetailUpdate::ThesisTopic(value) => value,
        }
    }
}

/// Set of optionally-present field values for an edit
///
/// Absent fields and blank strings leave the record unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gpa: Option<f64>,
    pub detail: Option<DetailUpdate>,
}

impl RecordUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.detail = Some(DetailUpdate::Major(major.into()));
        self
    }

    pub fn with_thesis_topic(mut self, topic: impl Into<String>) -> Self {
        self.detail = Some(DetailUpdate::ThesisTopic(topic.into()));
        self
    }

    /// Set the detail field for the given variant
    pub fn with_detail(self, kind: RecordKind, value: impl Into<String>) -> Self {
        match kind {
            RecordKind::Undergraduate => self.with_major(value),
            RecordKind::Graduate => self.with_thesis_topic(value),
        }
    }

    /// True when applying this update would change nothing
    pub fn is_empty(&self) -> bool {
        let blank = |s: &str| s.trim().is_empty();
        self.name.as_deref().map_or(true, blank)
            && self.age.is_none()
            && self.gpa.is_none()
            && self.detail.as_ref().map_or(true, |d| blank(d.value()))
    }
}
