use std::fmt;

use crate::consts::{MAX_CASE_REF_LEN, is_name_char};
use crate::error::AppError;

/// Normalized reference to an external case or incident: `#123` or `#(free text)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CaseRef(String);

impl CaseRef {
    /// Normalize user input. Blank input means no reference.
    pub(crate) fn parse(input: &str) -> Result<Option<Self>, AppError> {
        let token = input.trim();
        if token.is_empty() {
            return Ok(None);
        }

        let digits = token.strip_prefix('#').unwrap_or(token);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Some(Self(format!("#{digits}"))));
        }

        if token.chars().count() <= MAX_CASE_REF_LEN && token.chars().all(is_name_char) {
            return Ok(Some(Self(format!("#({token})"))));
        }

        Err(AppError::InvalidCaseRef {
            input: token.to_string(),
        })
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
