//! Page reference token.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::common::config::MAX_REFERENCE_LEN;
use crate::common::{InvalidInput, Result};

/// A page named in a reference string.
///
/// The simulator core is generic over any comparable token; this is the token
/// adapters use when pages arrive as text. Teaching material mixes numbered
/// pages (`7 0 1 2`) with lettered ones (`A B C`), so both are kept.
///
/// # Example
/// ```
/// use pagesim::PageRef;
///
/// let page: PageRef = "42".parse().unwrap();
/// assert_eq!(page, PageRef::Number(42));
///
/// let page: PageRef = "A".parse().unwrap();
/// assert_eq!(page, PageRef::Name("A".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRef {
    Number(i64),
    Name(String),
}

impl FromStr for PageRef {
    type Err = crate::common::Error;

    /// Integers become [`PageRef::Number`]; anything else non-blank is a name.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token.is_empty() {
            return Err(InvalidInput::BadPageToken(s.to_string()).into());
        }
        Ok(match token.parse::<i64>() {
            Ok(n) => PageRef::Number(n),
            Err(_) => PageRef::Name(token.to_string()),
        })
    }
}

impl From<i64> for PageRef {
    fn from(n: i64) -> Self {
        PageRef::Number(n)
    }
}

impl From<&str> for PageRef {
    fn from(name: &str) -> Self {
        PageRef::Name(name.to_string())
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Number(n) => fmt::Display::fmt(n, f),
            PageRef::Name(name) => f.pad(name),
        }
    }
}

/// Parse a reference string such as `"7, 0, 1 2"`.
///
/// Tokens are separated by commas and/or whitespace.
///
/// # Errors
/// - `InvalidInput::EmptyReferenceString` if no tokens are present
/// - `InvalidInput::TooManyReferences` past [`MAX_REFERENCE_LEN`]
pub fn parse_reference_string(text: &str) -> Result<Vec<PageRef>> {
    let pages = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<PageRef>>>()?;

    if pages.is_empty() {
        return Err(InvalidInput::EmptyReferenceString.into());
    }
    if pages.len() > MAX_REFERENCE_LEN {
        return Err(InvalidInput::TooManyReferences {
            len: pages.len(),
            limit: MAX_REFERENCE_LEN,
        }
        .into());
    }
    Ok(pages)
}

/// Read and parse a reference string stored in a text file.
///
/// # Errors
/// An I/O failure is reported with the path as context. Parse failures keep
/// their [`Error`](crate::common::Error) so callers can downcast to it.
pub fn load_reference_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<PageRef>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_reference_string(&text)?)
}
