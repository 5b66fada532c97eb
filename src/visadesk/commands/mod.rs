use uuid::Uuid;

pub mod about;
pub mod backup;
pub mod balances;
pub mod clients;
pub mod contact;
pub mod emails;
pub mod faq;
pub mod hero;
pub mod init;
pub mod ledger;
pub mod logs;
pub mod services;
pub mod settings;
pub mod testimonials;

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

/// Outcome of a mutating command: levelled messages for the UI plus the
/// ids of the records the command touched. Queries return typed data
/// directly instead.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub affected_ids: Vec<Uuid>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(message: CmdMessage) -> Self {
        Self {
            messages: vec![message],
            affected_ids: Vec::new(),
        }
    }

    /// True if no message at the Error level was recorded.
    pub fn succeeded(&self) -> bool {
        !self
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error))
    }
}
