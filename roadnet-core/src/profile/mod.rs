//! Built-in routing profiles for different travel modes
//!
//! A profile is a pure function from the original network to a derived
//! one: it rewrites speed and direction of every edge, drops what becomes
//! untraversable and renumbers the remaining nodes.

mod rewrite;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::model::NetworkView;

pub use rewrite::{FOOT_SPEED, FOOT_ONLY_CYCLING_SPEED, CYCLING_SPEED, MOTORWAY_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Default,
    Foot,
    Bicycle,
    Car,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::Default,
        Profile::Foot,
        Profile::Bicycle,
        Profile::Car,
    ];

    pub fn code(self) -> i64 {
        match self {
            Profile::Default => 0,
            Profile::Foot => 1,
            Profile::Bicycle => 2,
            Profile::Car => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Default => "default",
            Profile::Foot => "foot",
            Profile::Bicycle => "bicycle",
            Profile::Car => "car",
        }
    }

    /// Derives this profile's view of `original`.
    ///
    /// `Default` returns the original verbatim.
    pub fn derive(self, original: &NetworkView) -> NetworkView {
        match self {
            Profile::Default => original.clone(),
            _ => rewrite::derive_view(self, original),
        }
    }
}

impl TryFrom<i64> for Profile {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Profile::Default),
            1 => Ok(Profile::Foot),
            2 => Ok(Profile::Bicycle),
            3 => Ok(Profile::Car),
            other => Err(Error::InvalidProfile(format!(
                "unknown profile code {other}, expected 0 (default), 1 (foot), 2 (bicycle) or 3 (car)"
            ))),
        }
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Profile::Default),
            "foot" | "walk" => Ok(Profile::Foot),
            "bicycle" | "bike" => Ok(Profile::Bicycle),
            "car" => Ok(Profile::Car),
            _ => Err(Error::InvalidProfile(format!("unknown profile '{s}'"))),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
