//! Route views consumed by the instruction generator
//!
//! A route is produced by the host's routing engine; this module owns a
//! random-access snapshot of it. Neighbor access is bounds-checked through
//! [PositionView] instead of a nullable cursor.

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSet;

/// Relative turn direction versus the previous position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDirection {
    Left,
    SharpLeft,
    SlightlyLeft,
    Right,
    SharpRight,
    SlightlyRight,
    #[default]
    StraightOn,
    TurnBack,
}

impl RelativeDirection {
    /// The word looked up in the language reference for instruction text.
    pub fn phrase(&self) -> &'static str {
        match self {
            RelativeDirection::Left => "left",
            RelativeDirection::SharpLeft => "sharp left",
            RelativeDirection::SlightlyLeft => "slightly left",
            RelativeDirection::Right => "right",
            RelativeDirection::SharpRight => "sharp right",
            RelativeDirection::SlightlyRight => "slightly right",
            RelativeDirection::StraightOn => "straight on",
            RelativeDirection::TurnBack => "back",
        }
    }
}

/// Compass heading of the direction of travel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    #[default]
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Heading {
    pub fn phrase(&self) -> &'static str {
        match self {
            Heading::North => "north",
            Heading::NorthEast => "northeast",
            Heading::East => "east",
            Heading::SouthEast => "southeast",
            Heading::South => "south",
            Heading::SouthWest => "southwest",
            Heading::West => "west",
            Heading::NorthWest => "northwest",
        }
    }
}

/// An edge leaving a position other than the one traversed; a candidate
/// alternative for turn-relevance analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default)]
    pub attributes: AttributeSet,
    /// True when traversing the branch follows its tag-encoded forward
    /// direction.
    #[serde(default)]
    pub follows_encoding: bool,
}

impl Branch {
    pub fn new(attributes: AttributeSet, follows_encoding: bool) -> Branch {
        Branch {
            attributes,
            follows_encoding,
        }
    }
}

/// One step of a route: the geometry anchor, edge-level tags, node-level
/// meta attributes and the branches leaving the position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePosition {
    /// Index into the route geometry.
    pub shape: usize,
    /// Edge-level tags.
    #[serde(default)]
    pub attributes: AttributeSet,
    /// Node-level meta attributes (`name`, `junction`).
    #[serde(default)]
    pub meta: AttributeSet,
    #[serde(default)]
    pub branches: Vec<Branch>,
    /// Turn classification versus the previous position.
    #[serde(default)]
    pub relative_direction: RelativeDirection,
    /// Direction of travel leaving this position.
    #[serde(default)]
    pub heading: Heading,
}

/// A finished route computed for a single profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Full name of the profile the route was computed for.
    pub profile: String,
    /// True when the route mixes travel modes.
    #[serde(default)]
    pub multimodal: bool,
    pub positions: Vec<RoutePosition>,
}

impl Route {
    pub fn new(profile: impl Into<String>, positions: Vec<RoutePosition>) -> Route {
        Route {
            profile: profile.into(),
            multimodal: false,
            positions,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bounds-checked view of position `index`.
    pub fn position(&self, index: usize) -> Option<PositionView<'_>> {
        (index < self.positions.len()).then_some(PositionView { route: self, index })
    }

    /// Iterate positions in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = PositionView<'_>> {
        (0..self.positions.len()).map(move |index| PositionView { route: self, index })
    }
}

/// Read-only cursor over one route position with bounds-checked neighbor
/// access.
#[derive(Debug, Clone, Copy)]
pub struct PositionView<'a> {
    route: &'a Route,
    index: usize,
}

impl<'a> PositionView<'a> {
    fn data(&self) -> &'a RoutePosition {
        &self.route.positions[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.route.positions.len()
    }

    pub fn shape(&self) -> usize {
        self.data().shape
    }

    pub fn attributes(&self) -> &'a AttributeSet {
        &self.data().attributes
    }

    pub fn meta_attribute(&self, key: &str) -> Option<&'a str> {
        self.data().meta.get(key)
    }

    pub fn branches(&self) -> &'a [Branch] {
        &self.data().branches
    }

    pub fn relative_direction(&self) -> RelativeDirection {
        self.data().relative_direction
    }

    pub fn heading(&self) -> Heading {
        self.data().heading
    }

    pub fn next(&self) -> Option<PositionView<'a>> {
        self.route.position(self.index + 1)
    }

    pub fn previous(&self) -> Option<PositionView<'a>> {
        self.index.checked_sub(1).and_then(|i| self.route.position(i))
    }
}
