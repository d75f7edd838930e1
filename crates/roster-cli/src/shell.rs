//! Interactive command loop
//!
//! Each menu action runs to completion against the roster before the menu
//! is shown again. Operation errors are printed and the loop continues;
//! only console failures end it early.

use roster_domain::{format_record, Record, RecordKind, RecordUpdate, Roster, RosterError};
use tracing::{debug, info, warn};

use crate::{
    console::Console,
    error::{CliError, CliResult},
    input,
    menu::{self, MenuChoice},
    output::OutputStyle,
};

/// Whether the loop keeps running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven session over a roster
pub struct Shell<C> {
    roster: Roster,
    console: C,
    style: OutputStyle,
}

impl<C: Console> Shell<C> {
    pub fn new(roster: Roster, console: C, style: OutputStyle) -> Self {
        Self {
            roster,
            console,
            style,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consume the shell, returning the roster and console
    pub fn into_parts(self) -> (Roster, C) {
        (self.roster, self.console)
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> CliResult<()> {
        info!(records = self.roster.len(), "session started");

        loop {
            let menu = menu::render_menu(&self.style);
            self.console.print(&menu)?;

            let outcome = self
                .ask(menu::CHOICE_PROMPT)
                .and_then(|line| MenuChoice::parse(&line))
                .and_then(|choice| self.dispatch(choice));

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CliError::InputClosed) => {
                    info!("input closed, ending session");
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "operation failed");
                    let message = self.style.error(&e.user_message());
                    self.console.print(&message)?;
                }
                Err(e) => return Err(e),
            }
        }

        info!(records = self.roster.len(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> CliResult<Flow> {
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Add => self.add_record(),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::Edit => self.edit_record(),
            MenuChoice::Delete => self.delete_record(),
            MenuChoice::Exit => {
                self.console.print("Exiting System. Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }?;
        Ok(Flow::Continue)
    }

    /// Read a trimmed line, treating end of input as an error
    fn ask(&mut self, prompt: &str) -> CliResult<String> {
        self.console
            .read_line(prompt)?
            .map(|line| line.trim().to_string())
            .ok_or(CliError::InputClosed)
    }

    fn section(&mut self, title: &str) -> CliResult<()> {
        let header = self.style.header(title);
        self.console.print(&format!("\n{}", header))
    }

    fn show(&mut self, record: &Record) -> CliResult<()> {
        self.console.print(&format!("\n{}", format_record(record)))
    }

    fn add_record(&mut self) -> CliResult<()> {
        self.section("--- Add New Student ---")?;

        let id = self.ask("Enter ID (e.g., U100 or G200): ")?;
        if self.roster.contains(&id) {
            return Err(RosterError::DuplicateId { id }.into());
        }

        let name = self.ask("Enter Name: ")?;
        let age = input::parse_int("age", &self.ask("Enter Age: ")?)?;
        let gpa = input::parse_float("GPA", &self.ask("Enter GPA: ")?)?;

        let selector =
            self.ask("Is this an (U)ndergraduate or (G)raduate student? (U/G): ")?;
        let kind = input::parse_kind(&selector)?;

        let record = match kind {
            RecordKind::Undergraduate => {
                let major = self.ask("Enter Major: ")?;
                Record::undergraduate(id, name, age, gpa, major)
            }
            RecordKind::Graduate => {
                let topic = self.ask("Enter Thesis Topic: ")?;
                Record::graduate(id, name, age, gpa, topic)
            }
        };

        let message = format!(
            "Successfully added {} Student: {}",
            record.kind(),
            record.name()
        );
        self.roster.add(record)?;
        self.console.print(&self.style.success(&message))
    }

    fn view_all(&mut self) -> CliResult<()> {
        if self.roster.is_empty() {
            return self.console.print("\nNo student records available.");
        }

        let title = format!("--- All Student Records ({}) ---", self.roster.len());
        self.section(&title)?;

        let blocks: Vec<String> = self
            .roster
            .list()
            .iter()
            .map(|record| format!("\n{}", format_record(record)))
            .collect();
        for block in blocks {
            self.console.print(&block)?;
        }
        Ok(())
    }

    fn edit_record(&mut self) -> CliResult<()> {
        self.section("--- Edit Student Record ---")?;

        let id = self.ask("Enter ID of student to edit: ")?;
        let current = self
            .roster
            .find(&id)
            .cloned()
            .ok_or_else(|| RosterError::NotFound { id: id.clone() })?;

        self.console.print(&format!(
            "Editing Student: {} (ID: {})",
            current.name(),
            id
        ))?;

        let name = self.ask(&format!("Enter new Name (current: {}): ", current.name()))?;
        let age = self.ask(&format!("Enter new Age (current: {}): ", current.age()))?;
        let age = input::parse_optional_int("age", &age)?;
        let gpa = self.ask(&format!("Enter new GPA (current: {:?}): ", current.gpa()))?;
        let gpa = input::parse_optional_float("GPA", &gpa)?;

        let kind = current.kind();
        let detail = self.ask(&format!(
            "Enter new {} (current: {}): ",
            kind.detail_field(),
            current.program().detail()
        ))?;

        let mut update = RecordUpdate::new();
        if let Some(name) = input::optional(&name) {
            update = update.with_name(name);
        }
        if let Some(age) = age {
            update = update.with_age(age);
        }
        if let Some(gpa) = gpa {
            update = update.with_gpa(gpa);
        }
        if let Some(detail) = input::optional(&detail) {
            update = update.with_detail(kind, detail);
        }

        if update.is_empty() {
            let note = self.style.warning("\nNo changes entered. Record left as is.");
            return self.console.print(&note);
        }

        let updated = self.roster.edit(current.id().as_str(), &update)?.clone();
        self.console
            .print(&self.style.success("\nRecord updated successfully."))?;
        self.show(&updated)
    }

    fn delete_record(&mut self) -> CliResult<()> {
        self.section("--- Delete Student Record ---")?;

        let id = self.ask("Enter ID of student to delete: ")?;
        let removed = self.roster.delete(&id)?;

        let message = format!(
            "Successfully deleted student: {} (ID: {})",
            removed.name(),
            id
        );
        self.console.print(&self.style.success(&message))
    }
}
