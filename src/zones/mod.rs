//! Zone system for the player's cards.
//!
//! ## Key Types
//!
//! - `Zone`: Deck, hand, or discard pile
//! - `ZoneManager`: The three piles and the moves between them

pub mod manager;

pub use manager::{Zone, ZoneManager};
