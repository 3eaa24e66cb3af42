use crate::commands::{current_record_message, CmdMessage, CmdResult};
use crate::cursor::Cursor;
use crate::error::{Result, RolodexError};
use crate::model::RecordField;
use crate::name::capitalize_first;
use crate::phone::PhoneNumber;
use crate::store::Directory;

/// Replaces one field of the current record. The record moves to whatever
/// position its new key demands and stays selected there. A validation or
/// collision failure changes nothing, selection included.
pub fn run(
    store: &mut Directory,
    cursor: &mut Cursor,
    field: RecordField,
    value: &str,
) -> Result<CmdResult> {
    let index = cursor.index().ok_or(RolodexError::NoCurrentRecord)?;

    let patch = match field {
        RecordField::First => crate::store::FieldPatch::First(capitalize_first(value.trim())?),
        RecordField::Last => crate::store::FieldPatch::Last(capitalize_first(value.trim())?),
        RecordField::Phone => crate::store::FieldPatch::Phone(PhoneNumber::parse(value)?),
    };

    let new_index = store.replace_field(index, patch)?;
    cursor.select(new_index);

    let record = store.records()[new_index].clone();
    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    let what = match field {
        RecordField::First => "First name changed.",
        RecordField::Last => "Last name changed.",
        RecordField::Phone => "Phone number changed.",
    };
    result.add_message(CmdMessage::success(what));
    result.add_message(current_record_message(&record));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, delete, select};

    fn seeded() -> (Directory, Cursor) {
        let mut store = Directory::new();
        let mut cursor = Cursor::new();
        add::run(&mut store, &mut cursor, "Dino", "Cajic", "123-456-7890").unwrap();
        add::run(&mut store, &mut cursor, "Anna", "Smith", "222-333-4444").unwrap();
        (store, cursor)
    }

    #[test]
    fn changes_and_capitalizes_the_first_name() {
        let (mut store, mut cursor) = seeded();

        run(&mut store, &mut cursor, RecordField::First, "bob").unwrap();

        let index = cursor.index().unwrap();
        assert_eq!(store.records()[index].first_name, "Bob");
        assert_eq!(store.records()[index].last_name, "Smith");
    }

    #[test]
    fn a_last_name_change_moves_the_record_and_follows_it() {
        let (mut store, mut cursor) = seeded();
        select::run(&store, &mut cursor, "Anna", "Smith", "222-333-4444").unwrap();
        assert_eq!(cursor.index(), Some(1));

        run(&mut store, &mut cursor, RecordField::Last, "Adams").unwrap();

        // Smith -> Adams sorts the record ahead of Cajic.
        assert_eq!(cursor.index(), Some(0));
        assert_eq!(store.records()[0].last_name, "Adams");
        assert_eq!(store.records()[1].last_name, "Cajic");
    }

    #[test]
    fn changes_the_phone_number_to_a_fresh_one() {
        let (mut store, mut cursor) = seeded();

        run(&mut store, &mut cursor, RecordField::Phone, "(999) 888-7777").unwrap();

        let index = cursor.index().unwrap();
        assert_eq!(store.records()[index].phone_number.as_str(), "999-888-7777");
    }

    #[test]
    fn a_taken_number_changes_nothing() {
        let (mut store, mut cursor) = seeded();
        let before_index = cursor.index();

        let err = run(&mut store, &mut cursor, RecordField::Phone, "123-456-7890").unwrap_err();

        assert!(matches!(err, RolodexError::DuplicatePhoneNumber(_)));
        assert_eq!(cursor.index(), before_index);
        assert_eq!(store.records()[1].phone_number.as_str(), "222-333-4444");
    }

    #[test]
    fn a_blank_name_is_rejected() {
        let (mut store, mut cursor) = seeded();

        let err = run(&mut store, &mut cursor, RecordField::Last, "  ").unwrap_err();
        assert!(matches!(err, RolodexError::EmptyName));
        assert_eq!(store.records()[1].last_name, "Smith");
    }

    #[test]
    fn fails_after_the_current_record_was_deleted() {
        let (mut store, mut cursor) = seeded();
        delete::run(&mut store, &mut cursor).unwrap();

        let err = run(&mut store, &mut cursor, RecordField::First, "Bob").unwrap_err();
        assert!(matches!(err, RolodexError::NoCurrentRecord));
    }
}
