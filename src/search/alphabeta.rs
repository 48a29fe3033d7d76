//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the morris AI.
//! Scores are always from White's point of view, so White maximizes and
//! Black minimizes.
//!
//! # Features
//!
//! - Depth-limited minimax with alpha-beta pruning
//! - Apply/undo on a single working node: no allocation per searched position
//! - Deterministic move order, so equal scores always resolve the same way
//!
//! # Example
//!
//! ```
//! use morris::search::Searcher;
//! use morris::GameState;
//!
//! let mut game = GameState::new();
//! game.start();
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&game, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use crate::board::{Board, Piece};
use crate::eval::{evaluate, PatternScore};
use crate::rules::check_winner;
use crate::GameState;

use super::movegen::{generate_moves, Move, MoveList};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = PatternScore::WIN + 1;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Times a node stopped early because beta <= alpha
    pub beta_cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax value of the best move (static evaluation if there is no move)
    pub score: i32,
    /// Requested depth
    pub depth: i8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Working position for the search: the board plus the side to move.
///
/// Counters are not stored; they always equal the piece counts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub board: Board,
    pub to_move: Piece,
}

impl Node {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            to_move: state.current_player(),
        }
    }

    #[inline]
    pub fn moves(&self) -> MoveList {
        generate_moves(&self.board, self.to_move)
    }

    /// Apply a move produced by `moves()`. No legality checks.
    #[inline]
    pub fn make(&mut self, mv: Move) {
        match mv {
            Move::Placement(pos) => self.board.place_stone(pos, self.to_move),
            Move::Slide { from, to } => self.board.slide(from, to),
        }
        self.to_move = self.to_move.opponent();
    }

    /// Exact inverse of `make`
    #[inline]
    pub fn unmake(&mut self, mv: Move) {
        self.to_move = self.to_move.opponent();
        match mv {
            Move::Placement(pos) => self.board.remove_stone(pos),
            Move::Slide { from, to } => self.board.slide(to, from),
        }
    }
}

/// Alpha-beta searcher.
///
/// Holds only statistics; every call starts from a private copy of the
/// caller's position and leaves the caller's `GameState` untouched.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent call
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Minimax value of `state` searched `depth` plies deep within (alpha, beta).
    ///
    /// `maximizing` selects White's (true) or Black's (false) perspective for
    /// the node; in normal play it matches the side to move.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: i8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats = SearchStats::default();
        let mut node = Node::from_state(state);
        self.alpha_beta(&mut node, depth, alpha, beta, maximizing)
    }

    /// Pick the best move for the side to move in `state`.
    ///
    /// White keeps the first move with a strictly higher value, Black the
    /// first with a strictly lower one, so ties go to the earlier move in
    /// generation order. Each root child is searched with a full window.
    ///
    /// A move that completes a line is played before any searching: a win
    /// found deeper scores the same, and would otherwise win the tie.
    #[must_use]
    pub fn search(&mut self, state: &GameState, depth: i8) -> SearchResult {
        self.stats = SearchStats::default();

        let mut node = Node::from_state(state);
        let maximizing = node.to_move == Piece::White;
        let child_depth = depth.saturating_sub(1);
        let moves = node.moves();

        if let Some(mv) = Self::immediate_win(&mut node, &moves) {
            return SearchResult {
                best_move: Some(mv),
                score: if maximizing { PatternScore::WIN } else { -PatternScore::WIN },
                depth,
                stats: self.stats.clone(),
            };
        }

        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for &mv in &moves {
            node.make(mv);
            let score = self.alpha_beta(&mut node, child_depth, -INF, INF, !maximizing);
            node.unmake(mv);

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            best_score = evaluate(&node.board);
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            stats: self.stats.clone(),
        }
    }

    /// First move in `moves` that gives the side to move three in a row
    fn immediate_win(node: &mut Node, moves: &MoveList) -> Option<Move> {
        let mover = node.to_move;
        moves.iter().copied().find(|&mv| {
            node.make(mv);
            let wins = check_winner(&node.board) == Some(mover);
            node.unmake(mv);
            wins
        })
    }

    fn alpha_beta(
        &mut self,
        node: &mut Node,
        depth: i8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth <= 0 || check_winner(&node.board).is_some() {
            return evaluate(&node.board);
        }

        let moves = node.moves();
        // A side with no legal move is scored like a leaf
        if moves.is_empty() {
            return evaluate(&node.board);
        }

        if maximizing {
            let mut best = -INF;
            for &mv in &moves {
                node.make(mv);
                let score = self.alpha_beta(node, depth - 1, alpha, beta, false);
                node.unmake(mv);

                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for &mv in &moves {
                node.make(mv);
                let score = self.alpha_beta(node, depth - 1, alpha, beta, true);
                node.unmake(mv);

                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use proptest::prelude::*;

    /// Plain minimax, no pruning
    fn full_minimax(node: &mut Node, depth: i8, maximizing: bool) -> i32 {
        if depth <= 0 || check_winner(&node.board).is_some() {
            return evaluate(&node.board);
        }
        let moves = node.moves();
        if moves.is_empty() {
            return evaluate(&node.board);
        }
        let mut best = if maximizing { -INF } else { INF };
        for &mv in &moves {
            node.make(mv);
            let score = full_minimax(node, depth - 1, !maximizing);
            node.unmake(mv);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    fn position(white: &[(u8, u8)], black: &[(u8, u8)], to_move: Piece) -> GameState {
        let mut board = Board::new();
        for &(x, y) in white {
            board.place_stone(Pos::new(x, y), Piece::White);
        }
        for &(x, y) in black {
            board.place_stone(Pos::new(x, y), Piece::Black);
        }
        GameState::from_position(board, to_move)
    }

    /// Play `choices` as indices into the move list until the game ends
    fn play_out(choices: &[u8]) -> GameState {
        let mut game = GameState::new();
        game.start();
        for &choice in choices {
            if game.get_winner().is_some() {
                break;
            }
            let moves = Node::from_state(&game).moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[choice as usize % moves.len()];
            assert!(game.apply_move(mv), "generated move {} rejected", mv);
        }
        game
    }

    #[test]
    fn test_search_empty_board() {
        let mut searcher = Searcher::new();
        let mut game = GameState::new();
        game.start();

        let result = searcher.search(&game, 2);
        assert!(result.best_move.is_some());
        assert!(result.stats.nodes > 0);
    }

    #[test]
    fn test_search_finds_winning_placement() {
        // Row 0 = W W _, White to move
        let game = position(&[(0, 0), (1, 0)], &[], Piece::White);
        let mut searcher = Searcher::new();

        for depth in 1..=4 {
            let result = searcher.search(&game, depth);
            assert_eq!(result.best_move, Some(Move::Placement(Pos::new(2, 0))), "depth {}", depth);
            assert_eq!(result.score, PatternScore::WIN);
        }
    }

    #[test]
    fn test_search_finds_winning_slide() {
        // W (0,0) (1,0) (2,1)  B (0,1) (1,1) (1,2): White slides (2,1)->(2,0)
        let game = position(&[(0, 0), (1, 0), (2, 1)], &[(0, 1), (1, 1), (1, 2)], Piece::White);
        let mut searcher = Searcher::new();

        let result = searcher.search(&game, 1);
        assert_eq!(
            result.best_move,
            Some(Move::Slide {
                from: Pos::new(2, 1),
                to: Pos::new(2, 0),
            })
        );
        assert_eq!(result.score, PatternScore::WIN);
    }

    #[test]
    fn test_black_finds_winning_placement() {
        // Anti-diagonal needs (2,0)
        let game = position(&[(0, 0), (2, 2)], &[(0, 2), (1, 1)], Piece::Black);
        let mut searcher = Searcher::new();
        for depth in 1..=6 {
            let result = searcher.search(&game, depth);
            assert_eq!(result.best_move, Some(Move::Placement(Pos::new(2, 0))), "depth {}", depth);
            assert_eq!(result.score, -PatternScore::WIN);
        }
    }

    #[test]
    fn test_immediate_win_beats_slower_forced_win() {
        // W (0,0) (2,0) (2,2)  B (1,0) (0,1) (1,2), White to move.
        // (0,0)->(1,1) also forces a win, but (2,0)->(1,1) completes the diagonal now.
        let game = position(&[(0, 0), (2, 0), (2, 2)], &[(1, 0), (0, 1), (1, 2)], Piece::White);
        let winning = Move::Slide {
            from: Pos::new(2, 0),
            to: Pos::new(1, 1),
        };
        let mut searcher = Searcher::new();

        for depth in 1..=6 {
            let result = searcher.search(&game, depth);
            assert_eq!(result.best_move, Some(winning), "depth {}", depth);
            assert_eq!(result.score, PatternScore::WIN);
        }
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        // Black threatens column 0; White cannot win this turn and must block (0,2)
        let game = position(&[(1, 1), (2, 2)], &[(0, 0), (0, 1)], Piece::White);
        let mut searcher = Searcher::new();

        let result = searcher.search(&game, 2);
        assert_eq!(result.best_move, Some(Move::Placement(Pos::new(0, 2))));
    }

    #[test]
    fn test_ties_keep_first_move() {
        // Depth 1 on an empty board: every placement scores 0 statically
        let mut game = GameState::new();
        game.start();
        let mut searcher = Searcher::new();
        let result = searcher.search(&game, 1);
        assert_eq!(result.best_move, Some(Move::Placement(Pos::new(0, 0))));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_no_moves_returns_none() {
        // White boxed in on row 0 (already a finished game)
        let game = position(&[(0, 0), (1, 0), (2, 0)], &[(0, 1), (1, 1), (2, 1)], Piece::White);
        let mut searcher = Searcher::new();
        let result = searcher.search(&game, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, PatternScore::WIN);
    }

    #[test]
    fn test_minimax_terminal_returns_evaluation() {
        let game = position(&[(0, 0), (1, 1), (2, 2)], &[(1, 0), (2, 0)], Piece::Black);
        let mut searcher = Searcher::new();
        assert_eq!(searcher.minimax(&game, 4, -INF, INF, false), PatternScore::WIN);
        assert_eq!(searcher.stats().nodes, 1);
    }

    #[test]
    fn test_minimax_depth_zero_is_static() {
        let game = position(&[(0, 0), (1, 0)], &[], Piece::White);
        let mut searcher = Searcher::new();
        assert_eq!(searcher.minimax(&game, 0, -INF, INF, true), 1);
        assert_eq!(searcher.minimax(&game, -3, -INF, INF, true), 1);
    }

    #[test]
    fn test_non_positive_depth_at_root() {
        let game = position(&[(0, 0), (1, 0)], &[], Piece::White);
        let mut searcher = Searcher::new();
        let result = searcher.search(&game, 0);
        // Children are evaluated statically, so the win is still seen
        assert_eq!(result.best_move, Some(Move::Placement(Pos::new(2, 0))));
    }

    #[test]
    fn test_search_does_not_mutate_state() {
        let game = play_out(&[4, 0, 7, 2]);
        let before = game.clone();
        let mut searcher = Searcher::new();
        let _ = searcher.search(&game, 5);
        let _ = searcher.minimax(&game, 5, -INF, INF, true);
        assert_eq!(game, before);
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let mut game = GameState::new();
        game.start();
        let mut searcher = Searcher::new();
        let result = searcher.search(&game, 4);

        let mut node = Node::from_state(&game);
        let mut unpruned_nodes = 0u64;
        fn count(node: &mut Node, depth: i8, total: &mut u64) {
            *total += 1;
            if depth <= 0 || check_winner(&node.board).is_some() {
                return;
            }
            for mv in node.moves() {
                node.make(mv);
                count(node, depth - 1, total);
                node.unmake(mv);
            }
        }
        for mv in node.moves() {
            node.make(mv);
            count(&mut node, 3, &mut unpruned_nodes);
            node.unmake(mv);
        }

        assert!(result.stats.beta_cutoffs > 0);
        assert!(result.stats.nodes < unpruned_nodes);
    }

    #[test]
    fn test_make_unmake_round_trip() {
        let game = play_out(&[1, 3, 5, 0, 2, 4]);
        let mut node = Node::from_state(&game);
        let original = node;
        for mv in node.moves() {
            node.make(mv);
            assert_ne!(node, original);
            node.unmake(mv);
            assert_eq!(node, original);
        }
    }

    /// Moves for the side to move that complete a line
    fn winning_moves(game: &GameState) -> Vec<Move> {
        let mut node = Node::from_state(game);
        let mover = node.to_move;
        node.moves()
            .into_iter()
            .filter(|&mv| {
                node.make(mv);
                let wins = check_winner(&node.board) == Some(mover);
                node.unmake(mv);
                wins
            })
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_mate_in_one_never_missed(
            choices in proptest::collection::vec(any::<u8>(), 3..20),
            depth in 1i8..=6,
        ) {
            // Walk the random game up to the first position with a winning move
            let mut game = GameState::new();
            game.start();
            let mut wins = winning_moves(&game);
            for &choice in &choices {
                if !wins.is_empty() {
                    break;
                }
                let moves = Node::from_state(&game).moves();
                if moves.is_empty() {
                    break;
                }
                prop_assert!(game.apply_move(moves[choice as usize % moves.len()]));
                wins = winning_moves(&game);
            }
            if wins.is_empty() {
                return Ok(());
            }

            let mut searcher = Searcher::new();
            let result = searcher.search(&game, depth);
            let best = result.best_move;
            prop_assert!(best.map_or(false, |mv| wins.contains(&mv)), "depth {} picked {:?}, wins {:?}", depth, best, wins);
        }
    }

    proptest! {
        #[test]
        fn prop_alpha_beta_matches_minimax(
            choices in proptest::collection::vec(any::<u8>(), 0..14),
            depth in 0i8..=4,
        ) {
            let game = play_out(&choices);
            let maximizing = game.current_player() == Piece::White;

            let mut searcher = Searcher::new();
            let pruned = searcher.minimax(&game, depth, -INF, INF, maximizing);
            let full = full_minimax(&mut Node::from_state(&game), depth, maximizing);
            prop_assert_eq!(pruned, full);
        }

        #[test]
        fn prop_root_value_matches_minimax(
            choices in proptest::collection::vec(any::<u8>(), 0..14),
            depth in 1i8..=3,
        ) {
            let game = play_out(&choices);
            prop_assume!(game.get_winner().is_none());
            let maximizing = game.current_player() == Piece::White;

            let mut searcher = Searcher::new();
            let result = searcher.search(&game, depth);
            if result.best_move.is_some() {
                let full = full_minimax(&mut Node::from_state(&game), depth, maximizing);
                prop_assert_eq!(result.score, full);
            }
        }

        #[test]
        fn prop_generated_moves_are_legal(
            choices in proptest::collection::vec(any::<u8>(), 0..20),
        ) {
            let game = play_out(&choices);
            for mv in Node::from_state(&game).moves() {
                let mut copy = game.clone();
                prop_assert!(copy.apply_move(mv), "{} rejected", mv);
            }
        }
    }
}
