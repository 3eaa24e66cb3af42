use crate::phone::PhoneNumber;

/// A single directory entry.
///
/// Records only come into existence through the validated paths: names
/// capitalized, number canonical. Edits never mutate a stored record in
/// place; the store replaces the whole record so ordering can be
/// re-established in the same step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: PhoneNumber,
}

impl Record {
    pub fn new(first_name: String, last_name: String, phone_number: PhoneNumber) -> Self {
        Self {
            first_name,
            last_name,
            phone_number,
        }
    }
}

/// Which field of the current record a replacement targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    First,
    Last,
    Phone,
}
