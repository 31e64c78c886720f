use std::{fmt, str::FromStr};

use crate::Error;

/// Correlation token linking a callback to the outbound request that caused
/// it.
///
/// The value is opaque to the dispatch layer: nothing here inspects it beyond
/// comparing against [`JobId::INVALID`]. The decoder that constructs a
/// callback assigns it, and the dispatcher reads it to match responses
/// against pending requests.
///
/// A callback that is not a response to any request carries
/// [`JobId::INVALID`]. Treat the value as set-once: reassigning it after a
/// callback has been handed out for dispatch has no defined meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct JobId(u64);

impl JobId {
    /// The "no correlation" sentinel: the all-ones value.
    pub const INVALID: JobId = JobId(u64::MAX);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw 64-bit value, including the sentinel.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// `false` for [`JobId::INVALID`], `true` otherwise.
    pub const fn is_valid(self) -> bool {
        self.0 != u64::MAX
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u64> for JobId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<JobId> for u64 {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("invalid")
        }
    }
}

impl FromStr for JobId {
    type Err = Error;

    /// Parses the decimal form produced by `Display`, including the
    /// `"invalid"` sentinel spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "invalid" {
            return Ok(Self::INVALID);
        }
        Ok(Self(s.parse()?))
    }
}
