use crate::model::Bookmark;

pub mod add;
pub mod check;
pub mod edit;
pub mod list;
pub mod remove;
pub mod resolve;

#[derive(Debug, Clone, PartialEq, Eq)]
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
    /// Bookmarks created or removed by the command
    pub affected: Vec<Bookmark>,
    /// Bookmarks to display
    pub listed: Vec<Bookmark>,
    /// Target of a jump
    pub resolved: Option<Bookmark>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, bookmarks: Vec<Bookmark>) -> Self {
        self.affected = bookmarks;
        self
    }

    pub fn with_listed(mut self, bookmarks: Vec<Bookmark>) -> Self {
        self.listed = bookmarks;
        self
    }

    pub fn with_resolved(mut self, bookmark: Bookmark) -> Self {
        self.resolved = Some(bookmark);
        self
    }
}
