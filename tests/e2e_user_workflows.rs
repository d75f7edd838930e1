//! End-to-End Test Suite: Complete Roster Workflows
//!
//! Drives whole sessions the way a user would, starting from parsed
//! command-line flags and a config file, through the menu loop, and checks
//! both the transcript and the resulting roster.

use std::{fs, io::Cursor};

use clap::Parser;
use roster_cli::{
    config::ColorMode,
    router::{initial_roster, Cli},
    BufferedConsole, OutputStyle, Shell,
};
use roster_domain::{Record, RecordKind, Roster};
use tempfile::TempDir;

/// Run a scripted session and hand back the roster and transcript
fn run_script(roster: Roster, script: &str) -> (Roster, String) {
    let console = BufferedConsole::new(Cursor::new(script.to_string()), Vec::new());
    let mut shell = Shell::new(roster, console, OutputStyle::plain());
    shell.run().expect("session should complete");

    let (roster, console) = shell.into_parts();
    let transcript = String::from_utf8(console.into_writer()).expect("utf-8 transcript");
    (roster, transcript)
}

/// Full lifecycle: add, edit, view, delete, view again, exit
#[test]
fn test_complete_record_lifecycle() {
    let script = [
        // add a graduate student
        "1", "G010", "Hana Kim", "27", "3.66", "g", "Distributed Consensus",
        // edit only the GPA
        "3", "g010", "", "", "3.9", "",
        // list everything
        "2",
        // delete the seeded undergraduate
        "4", "U001",
        // list again
        "2",
        "5",
    ]
    .join("\n");

    let (roster, transcript) = run_script(Roster::with_examples(), &script);

    assert!(transcript.contains("Successfully added Graduate Student: Hana Kim"));
    assert!(transcript.contains("Editing Student: Hana Kim (ID: g010)"));
    assert!(transcript.contains("--- All Student Records (3) ---"));
    assert!(transcript.contains("Successfully deleted student: Alice Smith (ID: U001)"));
    assert!(transcript.contains("--- All Student Records (2) ---"));
    assert!(transcript.ends_with("Exiting System. Goodbye!\n"));

    let expected = vec![
        Record::graduate(
            "G002",
            "Bob Johnson",
            25,
            3.92,
            "Machine Learning Algorithms",
        ),
        Record::graduate("G010", "Hana Kim", 27, 3.9, "Distributed Consensus"),
    ];
    assert_eq!(roster.list(), expected.as_slice());
}

/// Seed scenario: case-insensitive lookups and id reuse after delete
#[test]
fn test_seed_scenario_through_menu() {
    let script = [
        // U001 still exists, rejected straight away
        "1", "U001",
        // remove Bob
        "4", "G002",
        // the freed id can be reused
        "1", "G002", "Ivan Petrov", "31", "3.05", "U", "Philosophy",
        "5",
    ]
    .join("\n");

    let (roster, transcript) = run_script(Roster::with_examples(), &script);

    assert!(transcript.contains("Error: Student with ID U001 already exists."));
    assert!(transcript.contains("Successfully deleted student: Bob Johnson (ID: G002)"));
    assert!(transcript.contains("Successfully added Undergraduate Student: Ivan Petrov"));

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.find("u001").unwrap().name(), "Alice Smith");
    assert_eq!(roster.find("g002").unwrap().kind(), RecordKind::Undergraduate);
}

/// Mistyped input at every stage recovers without losing data
#[test]
fn test_error_recovery_workflow() {
    let script = [
        "seven",                       // non-numeric menu input
        "0",                           // out of range
        "1", "U777", "Jo", "x",        // bad age
        "1", "U777", "Jo", "20", "y",  // bad GPA
        "1", "U777", "Jo", "20", "2.0", "Q", // bad type
        "3", "U999",                   // unknown id
        "4", "U999",                   // unknown id
        "2",
        "5",
    ]
    .join("\n");

    let (roster, transcript) = run_script(Roster::with_examples(), &script);

    assert!(transcript.contains("Invalid input. Please enter a valid number."));
    assert!(transcript.contains("Invalid choice. Please enter a number between 1 and 5."));
    assert!(transcript.contains("Invalid input. Please enter a valid age."));
    assert!(transcript.contains("Invalid input. Please enter a valid GPA."));
    assert!(transcript.contains("Invalid student type. Addition cancelled."));
    assert_eq!(
        transcript
            .matches("Error: Student with ID U999 not found.")
            .count(),
        2
    );
    assert!(transcript.contains("--- All Student Records (2) ---"));
    assert_eq!(roster, Roster::with_examples());
}

/// A config file that disables seeding starts the session empty
#[test]
fn test_unseeded_session_from_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "seed_examples = false\ncolor = \"never\"\n")
        .expect("Failed to write config");

    let cli = Cli::parse_from(["roster", "--config", config_path.to_str().unwrap()]);
    let config = cli.resolve_config().expect("config should load");
    assert_eq!(config.color, ColorMode::Never);

    let style = OutputStyle::from_mode(config.color);
    assert!(!style.use_colors);

    let script = "2\n1\nK1\nKai\n22\n3.3\nu\nDesign\n2\n5\n";
    let console = BufferedConsole::new(Cursor::new(script), Vec::new());
    let mut shell = Shell::new(initial_roster(&config), console, style);
    shell.run().expect("session should complete");

    let (roster, console) = shell.into_parts();
    let transcript = String::from_utf8(console.into_writer()).unwrap();
    assert!(transcript.contains("No student records available."));
    assert!(transcript.contains("--- All Student Records (1) ---"));
    assert_eq!(roster.len(), 1);
}
