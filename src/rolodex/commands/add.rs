use crate::commands::{current_record_message, CmdMessage, CmdResult};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::model::Record;
use crate::name::capitalize_first;
use crate::phone::PhoneNumber;
use crate::store::Directory;

/// Validates a new record, inserts it at its ordered position, and selects
/// it. Names are trimmed and capitalized, the phone number canonicalized.
/// On any failure the directory and the selection stay as they were.
pub fn run(
    store: &mut Directory,
    cursor: &mut Cursor,
    first_name: &str,
    last_name: &str,
    phone_number: &str,
) -> Result<CmdResult> {
    let first_name = capitalize_first(first_name.trim())?;
    let last_name = capitalize_first(last_name.trim())?;
    let phone_number = PhoneNumber::parse(phone_number)?;

    let record = Record::new(first_name, last_name, phone_number);
    let index = store.insert(record.clone())?;
    cursor.select(index);

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Added {} {}.",
        record.first_name, record.last_name
    )));
    result.add_message(current_record_message(&record));
    Ok(result)
}
