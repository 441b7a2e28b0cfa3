use std::{
    ffi::OsStr,
    num::{ParseFloatError, ParseIntError},
};

use crate::error::MarkError;

/// Error reporting for argument parsing that mimics imagemagick.
/// Use `.into_mark_error()` to attach the offending option to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgParseErr {
    pub message: Option<String>,
}

impl ArgParseErr {
    pub fn display_with_arg(&self, value: &OsStr) -> String {
        // mimicking imagemagick: if there is a specific message, show it to the user,
        // otherwise simply echo the value the user has passed
        match &self.message {
            Some(msg) => msg.clone(),
            None => value.to_string_lossy().into_owned(),
        }
    }

    pub fn into_mark_error(self, option: &'static str, value: &OsStr) -> MarkError {
        MarkError::unsupported(option, self.display_with_arg(value))
    }

    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_msg(str: impl ToString) -> Self {
        let string = str.to_string();
        Self {
            message: Some(string),
        }
    }
}

impl From<ParseFloatError> for ArgParseErr {
    fn from(_value: ParseFloatError) -> Self {
        Self::new()
    }
}

impl From<ParseIntError> for ArgParseErr {
    fn from(_value: ParseIntError) -> Self {
        Self::new()
    }
}

impl From<MarkError> for ArgParseErr {
    fn from(value: MarkError) -> Self {
        match value {
            MarkError::UnsupportedOption { value, .. } => Self::with_msg(value),
            other => Self::with_msg(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echoes_value_without_message() {
        let err = ArgParseErr::new().into_mark_error("opacity", OsStr::new("lots"));
        assert_eq!(err, MarkError::unsupported("opacity", "lots"));
    }

    #[test]
    fn test_prefers_message() {
        let err = ArgParseErr::with_msg("unrecognized gravity `up'")
            .into_mark_error("gravity", OsStr::new("up"));
        assert_eq!(err, MarkError::unsupported("gravity", "unrecognized gravity `up'"));
    }
}
