//! The ordered record sequence and the operations that keep it ordered.
//!
//! Two invariants hold between any two calls:
//!
//! 1. The records sit exactly where the left-to-right insertion scan placed
//!    them: non-decreasing by [`OrderKey`], with an equal-key candidate
//!    landing after the run of keys it equals.
//! 2. No two records share a canonical phone number.
//!
//! Every failing operation returns with the sequence untouched. In
//! particular, [`Directory::replace_field`] checks for phone collisions
//! before it removes anything, so a caller can never observe a record
//! that is removed but not yet re-inserted.
//!
//! Lookups and the insertion scan are linear. The directory is a
//! session-sized structure (low hundreds of records at the outside), and
//! the scan's exact equal-key placement is part of the contract, so there
//! is no binary search here.

use crate::error::{Result, RolodexError};
use crate::model::Record;
use crate::order::OrderKey;
use crate::phone::PhoneNumber;

/// A validated single-field replacement applied by
/// [`Directory::replace_field`]. Names arrive already capitalized and
/// phone numbers already canonical; raw user input is the command layer's
/// problem.
#[derive(Debug, Clone)]
pub enum FieldPatch {
    First(String),
    Last(String),
    Phone(PhoneNumber),
}

/// The ordered, phone-unique record sequence.
#[derive(Debug, Default)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in store order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// The index at which a record with `key` must be inserted to keep the
    /// scan ordering.
    ///
    /// Literal left-to-right scan: the first record whose key is strictly
    /// greater than `key` wins; otherwise the running index trails one past
    /// the last record compared, ending at the sequence length. An equal
    /// key is not "greater", so an equal-key candidate passes the whole
    /// equal run and lands just before the first strictly-greater record.
    pub fn insertion_index(&self, key: &OrderKey) -> usize {
        let mut index = 0;
        for (i, existing) in self.records.iter().enumerate() {
            if *key < OrderKey::of(existing) {
                return i;
            }
            index = i + 1;
        }
        index
    }

    /// Whether any record already holds `phone`.
    pub fn contains_number(&self, phone: &PhoneNumber) -> bool {
        self.records.iter().any(|r| r.phone_number == *phone)
    }

    /// Inserts a record at its scan position and returns that index.
    pub fn insert(&mut self, record: Record) -> Result<usize> {
        if self.contains_number(&record.phone_number) {
            return Err(RolodexError::DuplicatePhoneNumber(
                record.phone_number.clone(),
            ));
        }

        let index = self.insertion_index(&OrderKey::of(&record));
        self.records.insert(index, record);
        Ok(index)
    }

    /// Removes and returns the record at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            return Err(RolodexError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Index of the first record whose full [`OrderKey`] equals `key`.
    pub fn find_exact(&self, key: &OrderKey) -> Option<usize> {
        self.records.iter().position(|r| OrderKey::of(r) == *key)
    }

    /// Replaces one field of the record at `index` and returns the record's
    /// new position.
    ///
    /// This is a single transaction: the collision check for a phone patch
    /// runs against the store as it stands, before anything is removed, and
    /// a failure leaves the sequence exactly as it was. Note that replacing
    /// a record's number with its own current number counts as a collision,
    /// since the record itself still holds it.
    pub fn replace_field(&mut self, index: usize, patch: FieldPatch) -> Result<usize> {
        if index >= self.records.len() {
            return Err(RolodexError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        if let FieldPatch::Phone(phone) = &patch {
            if self.contains_number(phone) {
                return Err(RolodexError::DuplicatePhoneNumber(phone.clone()));
            }
        }

        let mut record = self.records.remove(index);
        match patch {
            FieldPatch::First(first) => record.first_name = first,
            FieldPatch::Last(last) => record.last_name = last,
            FieldPatch::Phone(phone) => record.phone_number = phone,
        }

        let new_index = self.insertion_index(&OrderKey::of(&record));
        self.records.insert(new_index, record);
        Ok(new_index)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a record without going through the command layer. Panics on
    /// bad phone input, which is fine for fixtures.
    pub fn record(first: &str, last: &str, phone: &str) -> Record {
        Record::new(
            first.to_string(),
            last.to_string(),
            PhoneNumber::parse(phone).unwrap(),
        )
    }

    /// A directory populated by inserting the given (first, last, phone)
    /// triples in order.
    pub fn directory_of(entries: &[(&str, &str, &str)]) -> Directory {
        let mut directory = Directory::new();
        for (first, last, phone) in entries {
            directory.insert(record(first, last, phone)).unwrap();
        }
        directory
    }
}
