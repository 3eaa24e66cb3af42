use crate::commands::{CmdMessage, CmdResult};
use crate::cursor::Cursor;
use crate::error::{Result, RolodexError};
use crate::store::Directory;

/// Removes the current record and clears the selection. Without a current
/// record this fails and nothing changes.
pub fn run(store: &mut Directory, cursor: &mut Cursor) -> Result<CmdResult> {
    let index = cursor.index().ok_or(RolodexError::NoCurrentRecord)?;
    let removed = store.remove_at(index)?;
    cursor.clear();

    let mut result = CmdResult::default().with_affected_records(vec![removed.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Removed {} {} ({}).",
        removed.first_name,
        removed.last_name,
        removed.phone_number.as_str()
    )));
    Ok(result)
}
