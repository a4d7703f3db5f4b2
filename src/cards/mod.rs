//! Card system: definitions and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier of a card template
//! - `CardType`: Attack / Defense / Skill
//! - `Card`: Immutable card template (cost, damage, armor, effects)
//! - `CardRegistry`: Card lookup, starter deck, and reward pool

pub mod definition;
pub mod registry;

pub use definition::{Card, CardId, CardType};
pub use registry::CardRegistry;
