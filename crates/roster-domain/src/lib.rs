//! Student roster domain
//!
//! This crate holds the in-memory student roster: the record model with its
//! two program variants, partial updates, the owning [`Roster`] container and
//! the display routine used by the console front end.
//!
//! # Examples
//!
//! ```
//! use roster_domain::{Record, RecordUpdate, Roster};
//!
//! let mut roster = Roster::new();
//! roster
//!     .add(Record::undergraduate("U100", "Carol White", 19, 3.4, "Physics"))
//!     .unwrap();
//!
//! roster
//!     .edit("u100", &RecordUpdate::new().with_name("Carol Black"))
//!     .unwrap();
//!
//! assert_eq!(roster.find("U100").unwrap().name(), "Carol Black");
//! ```

pub mod display;
pub mod entities;
pub mod errors;
pub mod roster;
pub mod update;
pub mod value_objects;

pub use display::format_record;
pub use entities::{Program, Record, RecordKind};
pub use errors::{RosterError, RosterResult};
pub use roster::{example_records, Roster};
pub use update::{DetailUpdate, RecordUpdate};
pub use value_objects::StudentId;
