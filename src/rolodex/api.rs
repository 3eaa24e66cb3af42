//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! one `Directory` and `Cursor` a session uses and is the single entry
//! point for every directory operation, regardless of the UI driving it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Threads the cursor** through every call so callers never track it
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or prompting
//! - **Presentation concerns**: Returns data structures, not formatted text
//!
//! ## Testing Strategy
//!
//! API tests should verify:
//! - Correct command is called for each method
//! - Arguments are passed through correctly
//!
//! API tests should **not** verify:
//! - Command logic (tested in command modules)
//! - Ordering behavior (tested in the store module)

use crate::commands;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::model::{Record, RecordField};
use crate::store::Directory;

/// The main API facade for directory operations.
///
/// Holds the session's record store and current-record cursor. All UI
/// clients should interact through this API.
#[derive(Debug, Default)]
pub struct DirectoryApi {
    store: Directory,
    cursor: Cursor,
}

impl DirectoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.store,
            &mut self.cursor,
            first_name,
            last_name,
            phone_number,
        )
    }

    pub fn delete_current(&mut self) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.cursor)
    }

    pub fn select_record(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<commands::CmdResult> {
        commands::select::run(
            &self.store,
            &mut self.cursor,
            first_name,
            last_name,
            phone_number,
        )
    }

    pub fn change_first_name(&mut self, value: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &mut self.cursor, RecordField::First, value)
    }

    pub fn change_last_name(&mut self, value: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &mut self.cursor, RecordField::Last, value)
    }

    pub fn change_phone_number(&mut self, value: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &mut self.cursor, RecordField::Phone, value)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// The current record, if one is selected.
    pub fn current(&self) -> Option<&Record> {
        self.cursor.index().and_then(|i| self.store.get(i))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_current_round_trips() {
        let mut api = DirectoryApi::new();
        api.add_record("dino", "cajic", "1234567890").unwrap();

        assert_eq!(api.len(), 1);
        let current = api.current().unwrap();
        assert_eq!(current.first_name, "Dino");
        assert_eq!(current.phone_number.as_str(), "123-456-7890");
    }

    #[test]
    fn delete_clears_the_current_record() {
        let mut api = DirectoryApi::new();
        api.add_record("Dino", "Cajic", "123-456-7890").unwrap();
        api.delete_current().unwrap();

        assert!(api.current().is_none());
        assert!(api.is_empty());
        assert_eq!(api.len(), 0);
    }

    #[test]
    fn select_then_change_follows_the_record() {
        let mut api = DirectoryApi::new();
        api.add_record("Dino", "Cajic", "123-456-7890").unwrap();
        api.add_record("Anna", "Smith", "222-333-4444").unwrap();

        api.select_record("Dino", "Cajic", "123-456-7890").unwrap();
        api.change_last_name("Zimmer").unwrap();

        let current = api.current().unwrap();
        assert_eq!(current.last_name, "Zimmer");
        assert_eq!(api.list_records().unwrap().listed_records[1].last_name, "Zimmer");
    }

    #[test]
    fn list_reflects_every_mutation() {
        let mut api = DirectoryApi::new();
        api.add_record("Dino", "Cajic", "123-456-7890").unwrap();
        api.add_record("Anna", "Smith", "222-333-4444").unwrap();
        api.delete_current().unwrap();

        let listed = api.list_records().unwrap().listed_records;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].last_name, "Cajic");
    }
}
