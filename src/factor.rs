//! Evaluator output types
//!
//! [CostFactor] is what a mode's evaluator returns per edge: a per-meter
//! time cost, an allowed-direction code and optional physical constraints.

use serde::{Deserialize, Serialize};

/// Allowed travel direction plus a no-stop flag, as a compact code.
///
/// Codes 3-5 are codes 0-2 with the no-stop offset applied: halting is not
/// allowed on the edge (motorway classes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Both = 0,
    Forward = 1,
    Backward = 2,
    BothNoStop = 3,
    ForwardNoStop = 4,
    BackwardNoStop = 5,
}

impl Direction {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Direction> {
        match code {
            0 => Some(Direction::Both),
            1 => Some(Direction::Forward),
            2 => Some(Direction::Backward),
            3 => Some(Direction::BothNoStop),
            4 => Some(Direction::ForwardNoStop),
            5 => Some(Direction::BackwardNoStop),
            _ => None,
        }
    }

    /// Apply the no-stop offset. The evaluator applies this at most once.
    pub fn no_stop(self) -> Direction {
        match self {
            Direction::Both => Direction::BothNoStop,
            Direction::Forward => Direction::ForwardNoStop,
            Direction::Backward => Direction::BackwardNoStop,
            other => other,
        }
    }

    pub fn can_stop(self) -> bool {
        matches!(
            self,
            Direction::Both | Direction::Forward | Direction::Backward
        )
    }

    pub fn is_bidirectional(self) -> bool {
        matches!(self, Direction::Both | Direction::BothNoStop)
    }

    pub fn forward_only(self) -> bool {
        matches!(self, Direction::Forward | Direction::ForwardNoStop)
    }

    pub fn backward_only(self) -> bool {
        matches!(self, Direction::Backward | Direction::BackwardNoStop)
    }
}

/// Physical limits attached to an edge.
///
/// Both fields are always set together; a zero value means the tag carried
/// no usable limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleConstraints {
    pub max_weight: f32,
    pub max_width: f32,
}

/// Result of evaluating a tag set for one travel mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostFactor {
    /// Cost per meter traveled, in seconds (inverse of meters per second).
    /// Zero means the edge cannot be used by this mode.
    pub seconds_per_meter: f32,
    pub direction: Direction,
    pub constraints: Option<VehicleConstraints>,
}

impl CostFactor {
    /// The canonical not-traversable sentinel.
    pub const IMPASSABLE: CostFactor = CostFactor {
        seconds_per_meter: 0.0,
        direction: Direction::Both,
        constraints: None,
    };

    pub fn is_traversable(&self) -> bool {
        self.seconds_per_meter > 0.0
    }
}
