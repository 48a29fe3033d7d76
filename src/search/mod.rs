//! Search module for the morris AI
//!
//! Contains:
//! - Move representation and legal move generation
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{Node, SearchResult, SearchStats, Searcher, INF};
pub use movegen::{generate_moves, Move, MoveList};
