//! Enemies: templates, the level roster, and intent selection.
//!
//! Enemies telegraph their next move. At the end of each enemy turn a new
//! intent is drawn from the template's weighted action table and shown to
//! the player; it resolves at the end of the player's following turn.

pub mod roster;
pub mod template;

pub use roster::EnemyRoster;
pub use template::{EnemyAction, EnemyActionKind, EnemyType, EnemyTypeId};
