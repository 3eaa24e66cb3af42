use crate::commands::{current_record_message, CmdMessage, CmdResult};
use crate::cursor::Cursor;
use crate::error::{Result, RolodexError};
use crate::order::OrderKey;
use crate::phone::PhoneNumber;
use crate::store::Directory;

/// Finds the record whose name and number match the given values exactly
/// (ignoring case) and makes it current. The names are trimmed but not
/// capitalized; the key comparison is case-insensitive anyway, and keeping
/// the raw spelling means a lookup can never invent a record that was
/// never stored.
pub fn run(
    store: &Directory,
    cursor: &mut Cursor,
    first_name: &str,
    last_name: &str,
    phone_number: &str,
) -> Result<CmdResult> {
    let phone_number = PhoneNumber::parse(phone_number)?;
    let key = OrderKey::from_parts(first_name.trim(), last_name.trim(), &phone_number);
    let index = store.find_exact(&key).ok_or(RolodexError::NotFound)?;
    cursor.select(index);

    let record = store.records()[index].clone();
    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success("Record selected."));
    result.add_message(current_record_message(&record));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn seeded() -> (Directory, Cursor) {
        let mut store = Directory::new();
        let mut cursor = Cursor::new();
        add::run(&mut store, &mut cursor, "Dino", "Cajic", "123-456-7890").unwrap();
        add::run(&mut store, &mut cursor, "Anna", "Smith", "222-333-4444").unwrap();
        (store, cursor)
    }

    #[test]
    fn selects_a_matching_record() {
        let (store, mut cursor) = seeded();
        cursor.clear();

        run(&store, &mut cursor, "Anna", "Smith", "222-333-4444").unwrap();
        assert_eq!(cursor.index(), Some(1));
    }

    #[test]
    fn matching_ignores_case_and_phone_formatting() {
        let (store, mut cursor) = seeded();

        run(&store, &mut cursor, "dino", "CAJIC", "(123) 456 7890").unwrap();
        assert_eq!(cursor.index(), Some(0));
    }

    #[test]
    fn a_miss_leaves_the_selection_alone() {
        let (store, mut cursor) = seeded();
        assert_eq!(cursor.index(), Some(1));

        let err = run(&store, &mut cursor, "Dino", "Cajic", "999-999-9999").unwrap_err();
        assert!(matches!(err, RolodexError::NotFound));
        assert_eq!(cursor.index(), Some(1));
    }

    #[test]
    fn a_bad_number_fails_validation_before_lookup() {
        let (store, mut cursor) = seeded();

        let err = run(&store, &mut cursor, "Dino", "Cajic", "123").unwrap_err();
        assert!(matches!(err, RolodexError::InvalidPhoneFormat(_)));
        assert_eq!(cursor.index(), Some(1));
    }

    #[test]
    fn name_must_match_along_with_the_number() {
        let (store, mut cursor) = seeded();

        let err = run(&store, &mut cursor, "Anna", "Cajic", "123-456-7890").unwrap_err();
        assert!(matches!(err, RolodexError::NotFound));
    }
}
