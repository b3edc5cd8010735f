//! Navigation profiles for OSM-style road networks
//!
//! Two travel modes (car, pedestrian) share one shape: a pure cost
//! evaluator that maps tag sets to a per-meter cost factor with direction
//! and constraint encoding, and an instruction generator that turns a
//! route view into turn-by-turn text. Both are deterministic, reentrant
//! and free of I/O; the whitelist out-parameter is the only mutation.

pub mod attributes;
pub mod factor;
pub mod instructions;
pub mod language;
pub mod profiles;
pub mod route;

pub use attributes::{AttributeSet, Whitelist};
pub use factor::{CostFactor, Direction, VehicleConstraints};
pub use instructions::{
    GeneratorError, Instruction, InstructionGenerator, InstructionKind,
};
pub use language::{English, LanguageReference, TranslationTable};
pub use profiles::{Mode, ProfileMeta};
pub use route::{Branch, Heading, PositionView, RelativeDirection, Route, RoutePosition};
