use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Directory;

/// Returns every record in store order. Never fails and never moves the
/// selection.
pub fn run(store: &Directory) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(store.records().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::directory_of;

    #[test]
    fn lists_records_in_store_order() {
        let store = directory_of(&[
            ("Dino", "Cajic", "123-456-7890"),
            ("Anna", "Adams", "222-333-4444"),
        ]);

        let result = run(&store).unwrap();
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(result.listed_records[0].last_name, "Adams");
        assert_eq!(result.listed_records[1].last_name, "Cajic");
    }

    #[test]
    fn an_empty_directory_lists_nothing() {
        let store = Directory::new();
        let result = run(&store).unwrap();
        assert!(result.listed_records.is_empty());
        assert!(result.messages.is_empty());
    }
}
