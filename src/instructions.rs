//! Turn-by-turn instruction synthesis
//!
//! A single forward pass over route positions, with a bounded backward walk
//! for roundabout exit counting and a one-step look-ahead for turn naming.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::attributes::Whitelist;
use crate::language::{substitute, LanguageReference};
use crate::profiles::Mode;
use crate::route::{Branch, PositionView, RelativeDirection, Route};

/// Instruction categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructionKind {
    Start,
    Stop,
    Roundabout,
    Turn,
}

/// One turn-by-turn instruction, anchored to a geometry shape index.
/// Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub shape: usize,
    pub kind: InstructionKind,
    pub text: String,
}

/// Precondition failures. These are programming errors at the call site,
/// never recoverable routing outcomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("cannot use a unimodal instruction generator on a multimodal route")]
    MultimodalRoute,
    #[error("cannot generate instructions for profile {expected} on a route computed for profile {actual}")]
    ProfileMismatch { expected: String, actual: String },
}

/// Generates instructions for routes computed with a single mode's profile.
#[derive(Debug, Clone, Copy)]
pub struct InstructionGenerator {
    mode: Mode,
}

impl InstructionGenerator {
    pub fn new(mode: Mode) -> InstructionGenerator {
        InstructionGenerator { mode }
    }

    /// Produce the ordered instruction list for `route`.
    pub fn generate(
        &self,
        route: &Route,
        language: &dyn LanguageReference,
    ) -> Result<Vec<Instruction>, GeneratorError> {
        if route.multimodal {
            return Err(GeneratorError::MultimodalRoute);
        }
        if !route.profile.eq_ignore_ascii_case(self.mode.name()) {
            return Err(GeneratorError::ProfileMismatch {
                expected: self.mode.name().to_string(),
                actual: route.profile.clone(),
            });
        }

        let mut instructions = Vec::new();
        for position in route.iter() {
            if position.is_first() {
                instructions.push(self.start(&position, language));
            } else if position.is_last() {
                instructions.push(self.stop(&position, language));
            } else if position.meta_attribute("junction") == Some("roundabout") {
                instructions.extend(self.roundabout(&position, language));
            } else {
                instructions.extend(self.turn(&position, language));
            }
        }
        debug!(
            profile = self.mode.name(),
            positions = route.len(),
            instructions = instructions.len(),
            "generated instructions"
        );
        Ok(instructions)
    }

    fn start(&self, position: &PositionView, language: &dyn LanguageReference) -> Instruction {
        let heading = language.lookup(position.heading().phrase());
        Instruction {
            shape: position.shape(),
            kind: InstructionKind::Start,
            text: substitute(language.lookup("Start {0}."), &[heading]),
        }
    }

    fn stop(&self, position: &PositionView, language: &dyn LanguageReference) -> Instruction {
        Instruction {
            shape: position.shape(),
            kind: InstructionKind::Stop,
            text: language.lookup("Arrived at destination.").to_string(),
        }
    }

    /// A branch is a real alternative when this mode can traverse it in the
    /// direction it leaves the junction.
    fn is_alternative(&self, branch: &Branch) -> bool {
        let mut whitelist = Whitelist::new();
        let factor = self.mode.evaluate_cost(&branch.attributes, &mut whitelist);
        if !factor.is_traversable() {
            return false;
        }
        factor.direction.is_bidirectional()
            || if branch.follows_encoding {
                factor.direction.forward_only()
            } else {
                factor.direction.backward_only()
            }
    }

    fn traversable_alternatives(&self, position: &PositionView) -> usize {
        position
            .branches()
            .iter()
            .filter(|branch| self.is_alternative(branch))
            .count()
    }

    /// Emitted at the position leaving the roundabout; positions still on
    /// it stay silent.
    fn roundabout(
        &self,
        position: &PositionView,
        language: &dyn LanguageReference,
    ) -> Option<Instruction> {
        let next = position.next()?;
        if next.meta_attribute("junction") == Some("roundabout") {
            return None;
        }

        // Count exits walking backward along the roundabout, this position
        // included.
        let mut exit = 1u32;
        let mut walk = Some(*position);
        while let Some(current) = walk {
            if current.meta_attribute("junction") != Some("roundabout") {
                break;
            }
            if self.traversable_alternatives(&current) > 0 {
                exit += 1;
            }
            walk = current.previous();
        }

        let text = match exit {
            1 => language
                .lookup("Take the first exit at the next roundabout.")
                .to_string(),
            2 => language
                .lookup("Take the second exit at the next roundabout.")
                .to_string(),
            3 => language
                .lookup("Take the third exit at the next roundabout.")
                .to_string(),
            n => substitute(
                language.lookup("Take the {0}th exit at the next roundabout."),
                &[&n.to_string()],
            ),
        };
        Some(Instruction {
            shape: next.shape(),
            kind: InstructionKind::Roundabout,
            text,
        })
    }

    fn turn(
        &self,
        position: &PositionView,
        language: &dyn LanguageReference,
    ) -> Option<Instruction> {
        let relative = position.relative_direction();
        let alternatives = self.traversable_alternatives(position);
        // Straight on only matters at a real junction; any other direction
        // matters as soon as there is a way not taken.
        let relevant = if relative == RelativeDirection::StraightOn {
            alternatives >= 2
        } else {
            alternatives >= 1
        };
        if !relevant {
            return None;
        }

        let word = language.lookup(relative.phrase());
        let next_name = position
            .next()
            .and_then(|next| next.meta_attribute("name"))
            .filter(|name| !name.is_empty());
        let text = match next_name {
            Some(name) => substitute(language.lookup("Go {0} on {1}."), &[word, name]),
            None => substitute(language.lookup("Go {0}."), &[word]),
        };
        Some(Instruction {
            shape: position.shape(),
            kind: InstructionKind::Turn,
            text,
        })
    }
}
