// file: src/form/state.rs
// description: field values of the search form

use crate::utils::Validator;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub pdf_directory: String,
    pub keyword: String,
    /// Optional; blank means results are not saved.
    pub save_directory: String,
}

impl FormState {
    pub fn new(
        pdf_directory: impl Into<String>,
        keyword: impl Into<String>,
        save_directory: impl Into<String>,
    ) -> Self {
        Self {
            pdf_directory: pdf_directory.into(),
            keyword: keyword.into(),
            save_directory: save_directory.into(),
        }
    }

    /// The same form with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            pdf_directory: Validator::sanitize_input(&self.pdf_directory),
            keyword: Validator::sanitize_input(&self.keyword),
            save_directory: Validator::sanitize_input(&self.save_directory),
        }
    }

    pub fn save_directory_path(&self) -> Option<PathBuf> {
        let trimmed = self.save_directory.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed() {
        let state = FormState::new("  /docs ", "\tbar\n", "   ");
        assert_eq!(state.trimmed(), FormState::new("/docs", "bar", ""));
    }

    #[test]
    fn test_save_directory_path() {
        assert_eq!(FormState::new("d", "k", " ").save_directory_path(), None);
        assert_eq!(
            FormState::new("d", "k", " /out ").save_directory_path(),
            Some(PathBuf::from("/out"))
        );
    }
}
