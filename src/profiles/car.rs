//! Car mode - tag semantics for automobile cost evaluation

use super::{oneway_direction, resolve_access, table_speed};
use crate::attributes::{AttributeSet, Whitelist};
use crate::factor::{CostFactor, Direction, VehicleConstraints};

/// Base speeds in km/h by highway classification.
pub(super) const SPEEDS: &[(&str, u32)] = &[
    ("motorway", 120),
    ("motorway_link", 120),
    ("trunk", 90),
    ("trunk_link", 90),
    ("primary", 90),
    ("primary_link", 90),
    ("secondary", 70),
    ("secondary_link", 70),
    ("tertiary", 70),
    ("tertiary_link", 70),
    ("unclassified", 50),
    ("residential", 50),
    ("service", 30),
    ("services", 30),
    ("road", 30),
    ("track", 30),
    ("living_street", 5),
    ("ferry", 5),
    ("movable", 5),
    ("shuttle_train", 10),
    ("default", 10),
];

/// Vehicle-type access tags, least to most specific.
pub(super) const VEHICLE_TAGS: &[&str] = &["vehicle", "motor_vehicle", "motorcar"];

/// Tag keys that can influence car routing.
pub(super) const TAG_WHITELIST: &[&str] = &[
    "highway",
    "oneway",
    "motorcar",
    "motor_vehicle",
    "vehicle",
    "access",
    "maxspeed",
    "maxweight",
    "maxwidth",
    "junction",
    "route",
];

/// Evaluate a tag set for car traversal.
pub(super) fn evaluate(tags: &AttributeSet, whitelist: &mut Whitelist) -> CostFactor {
    if tags.is_empty() {
        return CostFactor::IMPASSABLE;
    }

    let mut highway = tags.get("highway");
    if highway.is_some() {
        whitelist.record("highway");
    }
    let route = tags.get("route");
    if route.is_some() {
        whitelist.record("route");
    }
    // A ferry is a ferry, whatever the way is otherwise tagged as.
    if route == Some("ferry") {
        highway = Some("ferry");
    }

    let Some(highway) = highway.filter(|h| !h.is_empty()) else {
        return CostFactor::IMPASSABLE;
    };
    let Some(mut speed) = table_speed(SPEEDS, highway) else {
        return CostFactor::IMPASSABLE;
    };
    let canstop = !matches!(highway, "motorway" | "motorway_link");

    if resolve_access(tags, VEHICLE_TAGS) == Some(false) {
        return CostFactor::IMPASSABLE;
    }

    // A numeric posted limit overrides the table speed; traffic moves below
    // the posted value in practice.
    if let Some(posted) = tags.get("maxspeed") {
        whitelist.record("maxspeed");
        if let Ok(limit) = posted.trim().parse::<f32>() {
            speed = limit * 0.75;
        }
    }

    let mut max_weight = 0.0f32;
    let mut max_width = 0.0f32;
    if let Some(value) = tags.get("maxweight") {
        whitelist.record("maxweight");
        max_weight = value.trim().parse().unwrap_or(0.0);
    }
    if let Some(value) = tags.get("maxwidth") {
        whitelist.record("maxwidth");
        max_width = value.trim().parse().unwrap_or(0.0);
    }
    let constraints = (max_weight != 0.0 || max_width != 0.0).then_some(VehicleConstraints {
        max_weight,
        max_width,
    });

    let mut direction = Direction::Both;
    if let Some(junction) = tags.get("junction") {
        whitelist.record("junction");
        if junction == "roundabout" {
            direction = Direction::Forward;
        }
    }
    // An explicit oneway determination overrides the roundabout default.
    if let Some(oneway) = oneway_direction(tags, whitelist, "oneway") {
        direction = oneway;
    }

    if speed == 0.0 {
        return CostFactor::IMPASSABLE;
    }

    if !canstop {
        direction = direction.no_stop();
    }
    CostFactor {
        seconds_per_meter: 1.0 / (speed / 3.6),
        direction,
        constraints,
    }
}
