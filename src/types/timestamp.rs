// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block timestamps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds, as reported in a block header (always UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnixTimestamp(pub u64);

impl UnixTimestamp {
    /// Creates a UnixTimestamp from a block header value
    pub const fn from_u64(ts: u64) -> Self {
        Self(ts)
    }

    /// Seconds since the Unix epoch
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Converts to a UTC datetime
    ///
    /// Returns `None` for values chrono cannot represent.
    ///
    /// # Examples
    ///
    /// ```
    /// use transferscan::UnixTimestamp;
    ///
    /// let ts = UnixTimestamp::from_u64(1_700_000_000);
    /// let dt = ts.to_datetime().unwrap();
    /// assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    /// ```
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.0).ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

impl From<u64> for UnixTimestamp {
    fn from(ts: u64) -> Self {
        Self(ts)
    }
}

impl std::fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_timestamp_has_no_datetime() {
        assert!(UnixTimestamp(u64::MAX).to_datetime().is_none());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&UnixTimestamp(42)).unwrap();
        assert_eq!(json, "42");
    }
}
