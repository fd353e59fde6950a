use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Store-assigned film identifier.
///
/// Identifiers are handed out from a monotonically increasing counter and are
/// never reused, not even after the collection is cleared. On the wire they
/// render as a plain decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilmId(u64);

impl FilmId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parsing an address segment. Anything that is not a canonical decimal
/// identifier cannot name a live film, so it is reported as not found.
impl FromStr for FilmId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));

        if !canonical {
            return Err(CoreError::NotFound { id: s.to_string() });
        }

        s.parse::<u64>()
            .map(FilmId)
            .map_err(|_| CoreError::NotFound { id: s.to_string() })
    }
}
