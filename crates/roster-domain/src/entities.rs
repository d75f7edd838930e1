//! Student record entity and its program variants

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{RosterError, RosterResult},
    update::{DetailUpdate, RecordUpdate},
    value_objects::StudentId,
};

/// Variant tag of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Undergraduate,
    Graduate,
}

impl RecordKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Undergraduate => "Undergraduate",
            RecordKind::Graduate => "Graduate",
        }
    }

    /// Name of the field this variant adds to the common ones
    pub fn detail_field(&self) -> &'static str {
        match self {
            RecordKind::Undergraduate => "Major",
            RecordKind::Graduate => "Thesis Topic",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Variant-specific part of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Program {
    Undergraduate { major: String },
    Graduate { thesis_topic: String },
}

impl Program {
    /// Get the variant tag
    pub fn kind(&self) -> RecordKind {
        match self {
            Program::Undergraduate { .. } => RecordKind::Undergraduate,
            Program::Graduate { .. } => RecordKind::Graduate,
        }
    }

    /// Value of the variant-specific field
    pub fn detail(&self) -> &str {
        match self {
            Program::Undergraduate { major } => major,
            Program::Graduate { thesis_topic } => thesis_topic,
        }
    }
}

/// A single student entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: StudentId,
    name: String,
    age: i32,
    gpa: f64,
    program: Program,
}

impl Record {
    /// Create a record from its parts
    pub fn new(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        age: i32,
        gpa: f64,
        program: Program,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            gpa,
            program,
        }
    }

    /// Create an undergraduate record
    pub fn undergraduate(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        age: i32,
        gpa: f64,
        major: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            age,
            gpa,
            Program::Undergraduate {
                major: major.into(),
            },
        )
    }

    /// Create a graduate record
    pub fn graduate(
        id: impl Into<StudentId>,
        name: impl Into<String>,
        age: i32,
        gpa: f64,
        thesis_topic: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            age,
            gpa,
            Program::Graduate {
                thesis_topic: thesis_topic.into(),
            },
        )
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn kind(&self) -> RecordKind {
        self.program.kind()
    }

    /// Apply a partial update in place
    ///
    /// The variant check runs before any field is written, so a rejected
    /// update leaves the record untouched.
    pub(crate) fn apply(&mut self, update: &RecordUpdate) -> RosterResult<()> {
        let detail = update.detail.as_ref().filter(|d| !d.value().trim().is_empty());

        if let Some(detail) = detail {
            if detail.kind() != self.kind() {
                return Err(RosterError::VariantMismatch {
                    id: self.id.to_string(),
                    kind: self.kind(),
                    field: detail.kind().detail_field(),
                });
            }
        }

        if let Some(name) = update.name.as_deref().filter(|n| !n.trim().is_empty()) {
            self.name = name.to_string();
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gpa) = update.gpa {
            self.gpa = gpa;
        }

        match (&mut self.program, detail) {
            (Program::Undergraduate { major }, Some(DetailUpdate::Major(value))) => {
                *major = value.clone();
            }
            (Program::Graduate { thesis_topic }, Some(DetailUpdate::ThesisTopic(value))) => {
                *thesis_topic = value.clone();
            }
            _ => {}
        }

        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::display::format_record(self))
    }
}
