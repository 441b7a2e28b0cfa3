use std::{ffi::OsStr, str::FromStr};

use crate::arg_parse_err::ArgParseErr;

/// Strips leading and trailing whitespace from an input string slice
/// and attempts to parse the remaining string into a specified numeric type `T`.
///
/// # Returns
///
/// * `Ok(T)`: If stripping and parsing are successful, containing the parsed number.
/// * `Err(T::Err)`: If parsing fails, containing the error from `T::from_str`.
pub fn strip_and_parse_number<T>(input: &str) -> Result<T, T::Err>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    let trimmed_str = input.trim();
    trimmed_str.parse::<T>()
}

/// Parses a numeric command-line value such as the one following `-opacity` or `-rotate`.
pub fn parse_numeric_arg<T>(value: &OsStr) -> Result<T, ArgParseErr>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    let utf8 = value.to_str().ok_or_else(ArgParseErr::new)?;
    strip_and_parse_number(utf8).map_err(|_| ArgParseErr::new())
}
