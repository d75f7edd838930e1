//! Human-readable rendering of records

use crate::entities::{Program, Record};

/// Render a record as a multi-line block
///
/// The header and trailing field depend on the record's variant; the common
/// fields come in between with the GPA fixed to two decimals. No trailing
/// newline.
pub fn format_record(record: &Record) -> String {
    let (header, detail) = match record.program() {
        Program::Undergraduate { major } => (
            "--- Undergraduate Student ---",
            format!("Major: {}", major),
        ),
        Program::Graduate { thesis_topic } => (
            "--- Graduate Student ---",
            format!("Thesis Topic: {}", thesis_topic),
        ),
    };

    [
        header.to_string(),
        format!("ID: {}", record.id()),
        format!("Name: {}", record.name()),
        format!("Age: {}", record.age()),
        format!("GPA: {:.2}", record.gpa()),
        detail,
    ]
    .join("\n")
}
