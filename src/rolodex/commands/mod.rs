use crate::model::Record;

pub mod add;
pub mod delete;
pub mod list;
pub mod select;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }
}

/// The "Current record is" line that follows every command that moves the
/// selection.
pub fn current_record_message(record: &Record) -> CmdMessage {
    CmdMessage::info(format!(
        "Current record is: {} {} {}",
        record.first_name,
        record.last_name,
        record.phone_number.as_str()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_carry_their_level() {
        assert!(matches!(CmdMessage::info("x").level, MessageLevel::Info));
        assert!(matches!(
            CmdMessage::success("x").level,
            MessageLevel::Success
        ));
        assert!(matches!(
            CmdMessage::warning("x").level,
            MessageLevel::Warning
        ));
        assert!(matches!(CmdMessage::error("x").level, MessageLevel::Error));
    }
}
