//! Value types for the fixed two-colour deck.
//!
//! - `symbol`: the three glyphs a sequence position may hold.
//! - `sequence`: normalized R/B/X sequences and their derived counts.
//! - `deck`: the 11 R / 6 B deck composition and shuffled deals from it.

pub mod deck;
pub mod sequence;
pub mod symbol;
