//! Pedestrian mode - tag semantics for walking cost evaluation

use super::{oneway_direction, resolve_access, table_speed};
use crate::attributes::{AttributeSet, Whitelist};
use crate::factor::{CostFactor, Direction};

/// Allowed classifications, all walked at 4 km/h.
pub(super) const SPEEDS: &[(&str, u32)] = &[
    ("primary", 4),
    ("primary_link", 4),
    ("secondary", 4),
    ("secondary_link", 4),
    ("tertiary", 4),
    ("tertiary_link", 4),
    ("unclassified", 4),
    ("residential", 4),
    ("service", 4),
    ("services", 4),
    ("road", 4),
    ("track", 4),
    ("cycleway", 4),
    ("path", 4),
    ("footway", 4),
    ("pedestrian", 4),
    ("living_street", 4),
    ("ferry", 4),
    ("movable", 4),
    ("shuttle_train", 4),
    ("default", 4),
];

/// Vehicle-type access tags.
pub(super) const VEHICLE_TAGS: &[&str] = &["foot"];

/// Tag keys that can influence pedestrian routing.
pub(super) const TAG_WHITELIST: &[&str] = &[
    "highway", "foot", "footway", "access", "oneway", "junction", "route",
];

/// Evaluate a tag set for pedestrian traversal.
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
    if route == Some("ferry") {
        highway = Some("ferry");
    }

    let foot = tags.get("foot");
    if let Some(foot) = foot {
        if foot == "no" || foot == "0" {
            return CostFactor::IMPASSABLE;
        }
        whitelist.record("foot");
    }
    if tags.has("footway") {
        whitelist.record("footway");
    }

    let highway = match highway.filter(|h| !h.is_empty()) {
        Some(h) => h,
        // Ways tagged for foot access alone count as footways.
        None if foot.is_some_and(|f| !f.is_empty()) => "footway",
        None => return CostFactor::IMPASSABLE,
    };

    let Some(speed) = table_speed(SPEEDS, highway) else {
        return CostFactor::IMPASSABLE;
    };

    if resolve_access(tags, VEHICLE_TAGS) == Some(false) {
        return CostFactor::IMPASSABLE;
    }

    let mut direction = Direction::Both;
    if let Some(junction) = tags.get("junction") {
        whitelist.record("junction");
        if junction == "roundabout" {
            direction = Direction::Forward;
        }
    }
    if let Some(oneway) = oneway_direction(tags, whitelist, "oneway") {
        direction = oneway;
    }

    if speed == 0.0 {
        return CostFactor::IMPASSABLE;
    }

    // No pedestrian classification disallows stopping, so the no-stop
    // offset never applies here.
    CostFactor {
        seconds_per_meter: 1.0 / (speed / 3.6),
        direction,
        constraints: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;

    fn evaluate_fresh(tags: &AttributeSet) -> (CostFactor, Whitelist) {
        let mut whitelist = Whitelist::new();
        let factor = evaluate(tags, &mut whitelist);
        (factor, whitelist)
    }

    const WALK_FACTOR: f32 = 1.0 / (4.0 / 3.6);

    #[test]
    fn footway_walks_at_four_kmh() {
        let (factor, whitelist) = evaluate_fresh(&tags! {"highway": "footway"});
        assert!(factor.is_traversable());
        assert_eq!(factor.seconds_per_meter, WALK_FACTOR);
        assert_eq!(factor.direction, Direction::Both);
        assert_eq!(factor.constraints, None);
        assert_eq!(whitelist.sorted(), vec!["highway"]);
    }

    #[test]
    fn foot_no_is_impassable() {
        let (factor, whitelist) = evaluate_fresh(&tags! {"highway": "footway", "foot": "no"});
        assert!(!factor.is_traversable());
        assert!(whitelist.contains("highway"));
        assert!(!whitelist.contains("foot"));

        let (factor, _) = evaluate_fresh(&tags! {"highway": "footway", "foot": "0"});
        assert!(!factor.is_traversable());
    }

    #[test]
    fn foot_tag_defaults_missing_highway_to_footway() {
        let (factor, whitelist) = evaluate_fresh(&tags! {"foot": "yes"});
        assert!(factor.is_traversable());
        assert_eq!(factor.seconds_per_meter, WALK_FACTOR);
        assert_eq!(whitelist.sorted(), vec!["foot"]);
    }

    #[test]
    fn empty_foot_value_does_not_trigger_fallback() {
        let (factor, _) = evaluate_fresh(&tags! {"foot": ""});
        assert!(!factor.is_traversable());
    }

    #[test]
    fn motorway_is_not_walkable() {
        let (factor, _) = evaluate_fresh(&tags! {"highway": "motorway"});
        assert!(!factor.is_traversable());
    }

    #[test]
    fn ferry_reclassification_applies() {
        let (factor, _) = evaluate_fresh(&tags! {"route": "ferry"});
        assert!(factor.is_traversable());
        assert_eq!(factor.seconds_per_meter, WALK_FACTOR);

        let (reclassified, _) = evaluate_fresh(&tags! {"highway": "motorway", "route": "ferry"});
        assert!(reclassified.is_traversable());
    }

    #[test]
    fn access_resolution_uses_foot() {
        let (factor, _) = evaluate_fresh(&tags! {"highway": "footway", "access": "private"});
        assert!(!factor.is_traversable());

        let (factor, _) =
            evaluate_fresh(&tags! {"highway": "footway", "access": "private", "foot": "yes"});
        assert!(factor.is_traversable());
    }

    #[test]
    fn footway_key_recorded_for_retention() {
        let (_, whitelist) =
            evaluate_fresh(&tags! {"highway": "path", "footway": "sidewalk"});
        assert!(whitelist.contains("footway"));
    }

    #[test]
    fn direction_tags_apply_to_pedestrians() {
        let (factor, _) =
            evaluate_fresh(&tags! {"highway": "residential", "junction": "roundabout"});
        assert_eq!(factor.direction, Direction::Forward);

        let (factor, _) = evaluate_fresh(
            &tags! {"highway": "residential", "junction": "roundabout", "oneway": "-1"},
        );
        assert_eq!(factor.direction, Direction::Backward);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let tags = tags! {"highway": "path", "foot": "designated", "footway": "crossing"};
        let (first, first_whitelist) = evaluate_fresh(&tags);
        let (second, second_whitelist) = evaluate_fresh(&tags);
        assert_eq!(first, second);
        assert_eq!(first_whitelist, second_whitelist);
    }
}
