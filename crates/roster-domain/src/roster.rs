//! Ordered, owning collection of student records

use tracing::debug;

use crate::{
    entities::Record,
    errors::{RosterError, RosterResult},
    update::RecordUpdate,
};

/// In-memory roster holding every record for the process lifetime
///
/// Records keep their insertion order. IDs are unique under case-insensitive
/// comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<Record>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a roster from records, rejecting the first duplicate ID
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> RosterResult<Self> {
        let mut roster = Self::new();
        for record in records {
            roster.add(record)?;
        }
        Ok(roster)
    }

    /// Roster seeded with the two example students
    pub fn with_examples() -> Self {
        Self {
            records: example_records(),
        }
    }

    /// Find a record by ID, ignoring case
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id().matches(id))
    }

    /// Check if a record with this ID exists
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Append a record
    pub fn add(&mut self, record: Record) -> RosterResult<()> {
        if self.contains(record.id().as_str()) {
            return Err(RosterError::DuplicateId {
                id: record.id().to_string(),
            });
        }

        debug!(id = %record.id(), kind = %record.kind(), "adding record");
        self.records.push(record);
        Ok(())
    }

    /// All records in insertion order
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Apply a partial update to the record matching `id`
    pub fn edit(&mut self, id: &str, update: &RecordUpdate) -> RosterResult<&Record> {
        let index = self.position(id)?;
        let record = &mut self.records[index];
        record.apply(update)?;

        debug!(id = %record.id(), "record updated");
        Ok(&*record)
    }

    /// Remove and return the record matching `id`
    pub fn delete(&mut self, id: &str) -> RosterResult<Record> {
        let index = self.position(id)?;
        let record = self.records.remove(index);

        debug!(id = %record.id(), remaining = self.records.len(), "record deleted");
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> RosterResult<usize> {
        self.records
            .iter()
            .position(|r| r.id().matches(id))
            .ok_or_else(|| RosterError::NotFound { id: id.to_string() })
    }
}

/// The records a fresh session starts with
pub fn example_records() -> Vec<Record> {
    vec![
        Record::undergraduate("U001", "Alice Smith", 20, 3.85, "Computer Science"),
        Record::graduate(
            "G002",
            "Bob Johnson",
            25,
            3.92,
            "Machine Learning Algorithms",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find() {
        let mut roster = Roster::new();
        let record = Record::undergraduate("U100", "Carol", 19, 3.1, "Physics");
        roster.add(record.clone()).unwrap();
        assert_eq!(roster.find("U100"), Some(&record));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_add_duplicate_case_insensitive() {
        let mut roster = Roster::with_examples();
        let err = roster
            .add(Record::graduate("u001", "Other", 30, 2.0, "X"))
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::DuplicateId {
                id: "u001".to_string()
            }
        );
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_find_missing() {
        let roster = Roster::with_examples();
        assert!(roster.find("Z999").is_none());
        assert!(Roster::new().find("U001").is_none());
    }

    #[test]
    fn test_list_empty() {
        assert!(Roster::new().list().is_empty());
        assert!(Roster::new().is_empty());
    }

    #[test]
    fn test_edit_missing_is_not_found() {
        let mut roster = Roster::with_examples();
        let before = roster.clone();
        let err = roster
            .edit("nope", &RecordUpdate::new().with_name("X"))
            .unwrap_err();
        assert!(matches!(err, RosterError::NotFound { .. }));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_edit_returns_updated_record() {
        let mut roster = Roster::with_examples();
        let updated = roster
            .edit("g002", &RecordUpdate::new().with_thesis_topic("Robotics"))
            .unwrap();
        assert_eq!(updated.program().detail(), "Robotics");
        assert_eq!(updated.id().as_str(), "G002");
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut roster = Roster::with_records(vec![
            Record::undergraduate("A", "A", 1, 1.0, "a"),
            Record::undergraduate("B", "B", 2, 2.0, "b"),
            Record::undergraduate("C", "C", 3, 3.0, "c"),
        ])
        .unwrap();

        let removed = roster.delete("b").unwrap();
        assert_eq!(removed.name(), "B");

        let ids: Vec<_> = roster.list().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_with_records_rejects_duplicates() {
        let result = Roster::with_records(vec![
            Record::undergraduate("A", "A", 1, 1.0, "a"),
            Record::graduate("a", "A2", 2, 2.0, "t"),
        ]);
        assert!(matches!(result, Err(RosterError::DuplicateId { .. })));
    }
}
