use crate::model::Record;
use crate::phone::PhoneNumber;

/// The comparison key that defines directory order: case-insensitive
/// (last name, first name, phone number).
///
/// The derived `Ord` compares field by field in declaration order, which is
/// the tuple ordering the directory is sorted under. Keys are derived on
/// demand for comparisons and lookups; they are never stored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderKey {
    last: String,
    first: String,
    phone: String,
}

impl OrderKey {
    /// Key of an existing record.
    pub fn of(record: &Record) -> Self {
        Self::from_parts(
            &record.first_name,
            &record.last_name,
            &record.phone_number,
        )
    }

    /// Key for a candidate that has not been made into a record yet, e.g.
    /// a selection lookup.
    pub fn from_parts(first: &str, last: &str, phone: &PhoneNumber) -> Self {
        Self {
            last: last.to_lowercase(),
            first: first.to_lowercase(),
            phone: phone.as_str().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(first: &str, last: &str, phone: &str) -> OrderKey {
        OrderKey::from_parts(first, last, &PhoneNumber::parse(phone).unwrap())
    }

    #[test]
    fn last_name_dominates() {
        // ("cajic", "dino") sorts before ("smith", "anna") even though
        // "anna" < "dino" on first names.
        assert!(key("Dino", "Cajic", "123-456-7890") < key("Anna", "Smith", "222-333-4444"));
    }

    #[test]
    fn first_name_breaks_last_name_ties() {
        assert!(key("Anna", "Smith", "999-999-9999") < key("Bob", "Smith", "111-111-1111"));
    }

    #[test]
    fn phone_breaks_full_name_ties() {
        assert!(key("Anna", "Smith", "111-111-1111") < key("Anna", "Smith", "222-222-2222"));
    }

    #[test]
    fn comparison_ignores_case() {
        assert_eq!(key("ANNA", "SMITH", "111-111-1111"), key("anna", "smith", "111-111-1111"));
        assert!(key("anna", "ADAMS", "111-111-1111") < key("Anna", "baker", "222-222-2222"));
    }
}
