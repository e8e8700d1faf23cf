//! Stripe API version definitions.
//!
//! This module provides the [`ApiVersion`] enum sent in the `Stripe-Version`
//! header of every request.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Stripe API version.
///
/// Stripe versions are dated releases (`YYYY-MM-DD`). Accounts are pinned to
/// the version current when they were created unless a request overrides it.
/// The response types in this crate are modelled on the versions listed here;
/// any other well-formed date is accepted as [`ApiVersion::Custom`].
///
/// # Example
///
/// ```rust
/// use stripe_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert!(version.is_known());
///
/// let version: ApiVersion = "2019-03-14".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2019_03_14);
///
/// assert_eq!(format!("{}", ApiVersion::V2019_05_16), "2019-05-16");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2018-11-08
    V2018_11_08,
    /// API version 2019-02-11
    V2019_02_11,
    /// API version 2019-02-19
    V2019_02_19,
    /// API version 2019-03-14
    V2019_03_14,
    /// API version 2019-05-16
    V2019_05_16,
    /// Any other dated version.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version the response types are modelled on.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2019_05_16
    }

    /// Returns `true` for the named variants, `false` for [`ApiVersion::Custom`].
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns all named versions from oldest to newest.
    #[must_use]
    pub fn known_versions() -> Vec<Self> {
        vec![
            Self::V2018_11_08,
            Self::V2019_02_11,
            Self::V2019_02_19,
            Self::V2019_03_14,
            Self::V2019_05_16,
        ]
    }

    /// Returns the version as it appears in the `Stripe-Version` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2018_11_08 => "2018-11-08",
            Self::V2019_02_11 => "2019-02-11",
            Self::V2019_02_19 => "2019-02-19",
            Self::V2019_03_14 => "2019-03-14",
            Self::V2019_05_16 => "2019-05-16",
            Self::Custom(s) => s,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        // YYYY-MM-DD
        let parts: Vec<&str> = s.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return false;
        };

        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return false;
        }
        if !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
            return false;
        }

        let month: u32 = month.parse().unwrap_or(0);
        let day: u32 = day.parse().unwrap_or(0);
        (1..=12).contains(&month) && (1..=31).contains(&day)
    }
}

// Dates in YYYY-MM-DD form order lexicographically.
impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "2018-11-08" => Ok(Self::V2018_11_08),
            "2019-02-11" => Ok(Self::V2019_02_11),
            "2019-02-19" => Ok(Self::V2019_02_19),
            "2019-03-14" => Ok(Self::V2019_03_14),
            "2019-05-16" => Ok(Self::V2019_05_16),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
