// file: src/form/notification.rs
// description: modal messages raised by the search action

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    InputError,
    DirectoryNotFound,
    NoPdfsFound,
    SaveDirectoryNotFound,
    SaveSuccess,
    SaveFailure,
}

impl NotificationKind {
    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::InputError => "Input Error",
            NotificationKind::DirectoryNotFound | NotificationKind::NoPdfsFound => {
                "Directory Error"
            }
            NotificationKind::SaveDirectoryNotFound => "Save Directory Error",
            NotificationKind::SaveSuccess => "Save Results",
            NotificationKind::SaveFailure => "Save Error",
        }
    }

    pub fn level(self) -> NotificationLevel {
        match self {
            NotificationKind::InputError => NotificationLevel::Warning,
            NotificationKind::SaveSuccess => NotificationLevel::Success,
            NotificationKind::DirectoryNotFound
            | NotificationKind::NoPdfsFound
            | NotificationKind::SaveDirectoryNotFound
            | NotificationKind::SaveFailure => NotificationLevel::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn input_error() -> Self {
        Self::new(
            NotificationKind::InputError,
            "Please provide both directory and keyword.",
        )
    }

    pub fn directory_not_found() -> Self {
        Self::new(
            NotificationKind::DirectoryNotFound,
            "The specified PDF directory does not exist.",
        )
    }

    pub fn directory_unreadable(error: impl fmt::Display) -> Self {
        Self::new(
            NotificationKind::DirectoryNotFound,
            format!("The specified PDF directory could not be read: {error}"),
        )
    }

    pub fn no_pdfs_found() -> Self {
        Self::new(
            NotificationKind::NoPdfsFound,
            "No PDF files found in the specified directory.",
        )
    }

    pub fn save_directory_not_found(dir: &Path) -> Self {
        Self::new(
            NotificationKind::SaveDirectoryNotFound,
            format!(
                "The specified save directory does not exist: {}",
                dir.display()
            ),
        )
    }

    pub fn save_success(path: &Path) -> Self {
        Self::new(
            NotificationKind::SaveSuccess,
            format!("Results saved to {}", path.display()),
        )
    }

    pub fn save_failure(error: impl fmt::Display) -> Self {
        Self::new(
            NotificationKind::SaveFailure,
            format!("An error occurred while saving the file: {error}"),
        )
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn level(&self) -> NotificationLevel {
        self.kind.level()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message)
    }
}
