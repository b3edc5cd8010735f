//! Built-in travel modes and their tag semantics
//!
//! Each mode pairs a cost evaluator with an instruction generator, closed
//! over per-mode constant tables. The tables are part of the public
//! contract: changing them changes routing behavior, so they are exported
//! through [ProfileMeta] and versioned per mode.

pub mod car;
pub mod pedestrian;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeSet, Whitelist};
use crate::factor::{CostFactor, Direction};
use crate::instructions::{GeneratorError, Instruction, InstructionGenerator};
use crate::language::LanguageReference;
use crate::route::Route;

/// Access-family tag values shared by all modes.
///
/// `true` allows, `false` denies; values missing here leave the running
/// decision untouched.
pub const ACCESS_VALUES: &[(&str, bool)] = &[
    ("private", false),
    ("yes", true),
    ("no", false),
    ("permissive", true),
    ("destination", true),
    ("customers", false),
    ("designated", true),
    ("public", true),
    ("delivery", true),
    ("use_sidepath", false),
];

/// Travel modes with built-in tag semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Car,
    Pedestrian,
}

impl Mode {
    pub fn all() -> &'static [Mode] {
        &[Mode::Car, Mode::Pedestrian]
    }

    /// Full profile name, matched case-insensitively against route profiles.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Car => "car",
            Mode::Pedestrian => "pedestrian",
        }
    }

    pub fn from_name(name: &str) -> Option<Mode> {
        Mode::all()
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }

    /// Profile version; bumped on any table or semantics change.
    pub fn version(&self) -> u32 {
        match self {
            Mode::Car => 1,
            Mode::Pedestrian => 1,
        }
    }

    /// Evaluate a tag set into traversability, cost and direction, recording
    /// every influential key into `whitelist`.
    pub fn evaluate_cost(&self, tags: &AttributeSet, whitelist: &mut Whitelist) -> CostFactor {
        match self {
            Mode::Car => car::evaluate(tags, whitelist),
            Mode::Pedestrian => pedestrian::evaluate(tags, whitelist),
        }
    }

    /// Traversability check with the same whitelist side effects as
    /// [Mode::evaluate_cost].
    pub fn is_traversable(&self, tags: &AttributeSet, whitelist: &mut Whitelist) -> bool {
        self.evaluate_cost(tags, whitelist).is_traversable()
    }

    /// Generate turn-by-turn instructions for a route computed with this
    /// mode's profile.
    pub fn generate_instructions(
        &self,
        route: &Route,
        language: &dyn LanguageReference,
    ) -> Result<Vec<Instruction>, GeneratorError> {
        InstructionGenerator::new(*self).generate(route, language)
    }

    /// Base speed table, km/h by highway classification.
    pub fn speed_table(&self) -> &'static [(&'static str, u32)] {
        match self {
            Mode::Car => car::SPEEDS,
            Mode::Pedestrian => pedestrian::SPEEDS,
        }
    }

    /// The shared access-value table.
    pub fn access_values(&self) -> &'static [(&'static str, bool)] {
        ACCESS_VALUES
    }

    /// Vehicle-type access tags, least to most specific.
    pub fn vehicle_tags(&self) -> &'static [&'static str] {
        match self {
            Mode::Car => car::VEHICLE_TAGS,
            Mode::Pedestrian => pedestrian::VEHICLE_TAGS,
        }
    }

    /// Tag keys that can influence this mode; the host retains these per
    /// edge.
    pub fn tag_whitelist(&self) -> &'static [&'static str] {
        match self {
            Mode::Car => car::TAG_WHITELIST,
            Mode::Pedestrian => pedestrian::TAG_WHITELIST,
        }
    }

    /// Export the mode's constant tables for versioning.
    pub fn meta(&self) -> ProfileMeta {
        ProfileMeta::for_mode(*self)
    }
}

/// Versioned export of a mode's constant tables.
///
/// Hosts pin the version the way the routing pipeline pins profile versions
/// in profile_meta.json: a table change is a routing behavior change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMeta {
    pub profile: String,
    pub version: u32,
    pub speeds_kmh: BTreeMap<String, u32>,
    pub access_values: BTreeMap<String, bool>,
    pub vehicle_tags: Vec<String>,
    pub tag_whitelist: Vec<String>,
}

impl ProfileMeta {
    pub fn for_mode(mode: Mode) -> ProfileMeta {
        ProfileMeta {
            profile: mode.name().to_string(),
            version: mode.version(),
            speeds_kmh: mode
                .speed_table()
                .iter()
                .map(|(class, kmh)| (class.to_string(), *kmh))
                .collect(),
            access_values: ACCESS_VALUES
                .iter()
                .map(|(value, allowed)| (value.to_string(), *allowed))
                .collect(),
            vehicle_tags: mode.vehicle_tags().iter().map(|t| t.to_string()).collect(),
            tag_whitelist: mode.tag_whitelist().iter().map(|t| t.to_string()).collect(),
        }
    }
}

fn access_value(value: &str) -> Option<bool> {
    ACCESS_VALUES
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, allowed)| *allowed)
}

/// Resolve the access decision for a tag set: generic `access` first, then
/// each vehicle-type tag in declared order; the last recognized value wins.
/// `None` means unspecified, which is permissive.
pub(crate) fn resolve_access(tags: &AttributeSet, vehicle_tags: &[&str]) -> Option<bool> {
    let mut decision = None;
    if let Some(value) = tags.get("access") {
        if let Some(allowed) = access_value(value) {
            decision = Some(allowed);
        }
    }
    for key in vehicle_tags {
        if let Some(value) = tags.get(key) {
            if let Some(allowed) = access_value(value) {
                decision = Some(allowed);
            }
        }
    }
    decision
}

/// Interpret a one-way tag. The key is recorded whenever present, even when
/// the value is empty or malformed.
pub(crate) fn oneway_direction(
    tags: &AttributeSet,
    whitelist: &mut Whitelist,
    key: &'static str,
) -> Option<Direction> {
    let value = tags.get(key)?;
    whitelist.record(key);
    match value {
        "yes" | "true" | "1" => Some(Direction::Forward),
        "-1" => Some(Direction::Backward),
        _ => None,
    }
}

/// Look up the base speed for a classification, in km/h.
pub(crate) fn table_speed(table: &[(&str, u32)], classification: &str) -> Option<f32> {
    table
        .iter()
        .find(|(name, _)| *name == classification)
        .map(|(_, kmh)| *kmh as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;

    #[test]
    fn mode_names() {
        assert_eq!(Mode::Car.name(), "car");
        assert_eq!(Mode::Pedestrian.name(), "pedestrian");
        assert_eq!(Mode::from_name("car"), Some(Mode::Car));
        assert_eq!(Mode::from_name("Pedestrian"), Some(Mode::Pedestrian));
        assert_eq!(Mode::from_name("bike"), None);
    }

    #[test]
    fn access_unspecified_is_permissive() {
        assert_eq!(resolve_access(&tags! {}, car::VEHICLE_TAGS), None);
        assert_eq!(
            resolve_access(&tags! {"access": "agricultural"}, car::VEHICLE_TAGS),
            None,
        );
    }

    #[test]
    fn later_vehicle_tags_override_access() {
        assert_eq!(
            resolve_access(&tags! {"access": "private"}, car::VEHICLE_TAGS),
            Some(false),
        );
        assert_eq!(
            resolve_access(
                &tags! {"access": "private", "motorcar": "yes"},
                car::VEHICLE_TAGS,
            ),
            Some(true),
        );
        assert_eq!(
            resolve_access(
                &tags! {"vehicle": "yes", "motorcar": "no"},
                car::VEHICLE_TAGS,
            ),
            Some(false),
        );
    }

    #[test]
    fn unrecognized_value_keeps_last_decision() {
        assert_eq!(
            resolve_access(
                &tags! {"access": "no", "motorcar": "maybe"},
                car::VEHICLE_TAGS,
            ),
            Some(false),
        );
    }

    #[test]
    fn oneway_values() {
        let mut whitelist = Whitelist::new();
        assert_eq!(
            oneway_direction(&tags! {"oneway": "yes"}, &mut whitelist, "oneway"),
            Some(Direction::Forward),
        );
        assert_eq!(
            oneway_direction(&tags! {"oneway": "-1"}, &mut whitelist, "oneway"),
            Some(Direction::Backward),
        );
        assert_eq!(
            oneway_direction(&tags! {"oneway": "no"}, &mut whitelist, "oneway"),
            None,
        );
        assert_eq!(
            oneway_direction(&tags! {}, &mut whitelist, "oneway"),
            None,
        );
    }

    #[test]
    fn oneway_recorded_even_when_malformed() {
        let mut whitelist = Whitelist::new();
        oneway_direction(&tags! {"oneway": ""}, &mut whitelist, "oneway");
        assert!(whitelist.contains("oneway"));

        let mut whitelist = Whitelist::new();
        oneway_direction(&tags! {}, &mut whitelist, "oneway");
        assert!(whitelist.is_empty());
    }

    #[test]
    fn meta_exports_tables() {
        let meta = Mode::Car.meta();
        assert_eq!(meta.profile, "car");
        assert_eq!(meta.version, 1);
        assert_eq!(meta.speeds_kmh.get("motorway"), Some(&120));
        assert_eq!(meta.access_values.get("use_sidepath"), Some(&false));
        assert_eq!(meta.vehicle_tags, vec!["vehicle", "motor_vehicle", "motorcar"]);
        assert!(meta.tag_whitelist.contains(&"maxweight".to_string()));

        let meta = Mode::Pedestrian.meta();
        assert_eq!(meta.profile, "pedestrian");
        assert!(meta.speeds_kmh.values().all(|&kmh| kmh == 4));
        assert_eq!(meta.vehicle_tags, vec!["foot"]);
    }
}
