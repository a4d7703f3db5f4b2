//! Effect system for card abilities.
//!
//! - `CardEffect`: Closed set of extra card abilities, parsed from tags
//! - `EffectResolver`: Applies a played card to the game state
//!
//! Plain damage and armor are card fields; everything else a card does is
//! a `CardEffect`.

mod effect;
mod resolver;

pub use effect::{CardEffect, StatusApplication, Target, TEMPORARY_STRENGTH_TURNS, VULNERABLE_TURNS};
pub use resolver::EffectResolver;
