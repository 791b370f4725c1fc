//! Delimiter-separated paths into nested values.

use std::fmt;

/// Default segment delimiter.
pub const DEFAULT_DELIMITER: char = '.';

/// A parsed path: the ordered segments of a delimiter-separated string.
///
/// Splitting never drops segments, so `"a..b"` has an empty middle segment and
/// `""` is a single empty segment. The zero-segment path addressing the whole
/// structure is [`Path::root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    segments: Vec<&'a str>,
    delimiter: char,
}

impl<'a> Path<'a> {
    /// The path with no segments.
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Split `raw` on `delimiter`.
    pub fn parse(raw: &'a str, delimiter: char) -> Self {
        Self {
            segments: raw.split(delimiter).collect(),
            delimiter,
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Split into the parent segments and the final segment.
    pub fn split_last(&self) -> Option<(&'a str, &[&'a str])> {
        self.segments
            .split_last()
            .map(|(last, parents)| (*last, parents))
    }
}

impl<'a> From<&'a str> for Path<'a> {
    fn from(raw: &'a str) -> Self {
        Self::parse(raw, DEFAULT_DELIMITER)
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                write!(f, "{}", self.delimiter)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
