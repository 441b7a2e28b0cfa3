//! Quoting of untrusted strings for a POSIX `sh` command line.
//!
//! Every word that ends up in a [`CommandString`](crate::command::CommandString)
//! is a [`ShellArg`], and the only way to get one from arbitrary input is
//! [`ShellArg::quote`]. Tokens the crate generates itself (flag names, numbers,
//! gravity names) go through [`ShellArg::verbatim`], which still falls back to
//! quoting if anything outside a small safe alphabet sneaks in.

use std::fmt::Display;

/// A single shell word, already quoted where necessary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShellArg(String);

impl ShellArg {
    /// Wraps `untrusted` in single quotes, the same way PHP's `escapeshellarg` does on unix.
    ///
    /// Inside single quotes `sh` treats every byte literally except `'` itself,
    /// so each embedded quote is closed, emitted as `\'`, and reopened.
    pub fn quote(untrusted: &str) -> Self {
        let mut quoted = String::with_capacity(untrusted.len() + 2);
        quoted.push('\'');
        for c in untrusted.chars() {
            if c == '\'' {
                quoted.push_str(r"'\''");
            } else {
                quoted.push(c);
            }
        }
        quoted.push('\'');
        Self(quoted)
    }

    /// A crate-generated token such as `-gravity` or `+0+0`.
    pub(crate) fn verbatim(token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() && token.bytes().all(is_safe_byte) {
            Self(token)
        } else {
            Self::quote(&token)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShellArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bytes `sh` never gives special meaning to, anywhere in a word.
fn is_safe_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"+-_.,:%=/@".contains(&b)
}
