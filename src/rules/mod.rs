//! Game rules for Three Men's Morris
//!
//! This module implements the rule set:
//! - Phases (placement, then sliding movement)
//! - Legality of placements and slides
//! - Win condition (three in a row on one of the 8 lines)

pub mod legality;
pub mod win;

// Re-exports for convenient access
pub use legality::{is_valid_placement, is_valid_slide, Phase};
pub use win::{check_winner, find_winning_line};
