//! Street network components - nodes, edges and direction tags

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::{Cost, Error, NodeId};

/// Street graph node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position of the node in the node table
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn geometry(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

/// Direction tag of a street segment.
///
/// Unknown tags are kept verbatim and treated as forward-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Oneway {
    /// `""`
    #[default]
    Forward,
    /// `"B"`, traversable both ways
    Both,
    /// `"N"`, not traversable
    Closed,
    /// `"TF"`, traversable against the digitized direction only
    Reverse,
    /// `"foot_only"`
    FootOnly,
    Other(String),
}

impl Oneway {
    pub fn as_str(&self) -> &str {
        match self {
            Oneway::Forward => "",
            Oneway::Both => "B",
            Oneway::Closed => "N",
            Oneway::Reverse => "TF",
            Oneway::FootOnly => "foot_only",
            Oneway::Other(tag) => tag,
        }
    }
}

impl From<&str> for Oneway {
    fn from(tag: &str) -> Self {
        match tag {
            "" => Oneway::Forward,
            "B" => Oneway::Both,
            "N" => Oneway::Closed,
            "TF" => Oneway::Reverse,
            "foot_only" => Oneway::FootOnly,
            other => Oneway::Other(other.to_string()),
        }
    }
}

impl From<String> for Oneway {
    fn from(tag: String) -> Self {
        Oneway::from(tag.as_str())
    }
}

impl From<Oneway> for String {
    fn from(oneway: Oneway) -> Self {
        oneway.as_str().to_string()
    }
}

impl FromStr for Oneway {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Oneway::from(s))
    }
}

impl fmt::Display for Oneway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Street graph edge (street segment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Travel time in minutes, or the supplied cost for cost based graphs
    pub cost: Cost,
    /// km/h
    pub speed: f64,
    /// meters
    pub length: f64,
    pub oneway: Oneway,
}

impl Edge {
    /// Weight of the edge under the given cost mode
    pub fn weight(&self, mode: CostMode) -> f64 {
        match mode {
            CostMode::Time => self.cost,
            CostMode::Distance => self.length,
        }
    }

    pub(crate) fn reversed(&self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
            ..self.clone()
        }
    }
}

/// Travel time in minutes for `length` meters at `speed` km/h
pub fn travel_minutes(length: f64, speed: f64) -> Cost {
    if length <= 0.0 {
        0.0
    } else if speed <= 0.0 {
        f64::INFINITY
    } else {
        (length / 1000.0) / (speed / 3600.0) / 60.0
    }
}

/// Which edge attribute a distance matrix accumulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
    #[default]
    Time,
    Distance,
}

impl FromStr for CostMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(CostMode::Time),
            "distance" => Ok(CostMode::Distance),
            other => Err(Error::InvalidMode(format!(
                "expected 'time' or 'distance', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for CostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostMode::Time => f.write_str("time"),
            CostMode::Distance => f.write_str("distance"),
        }
    }
}
