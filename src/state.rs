//! Game position used by the search: board, side to move and result

use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::rules::{candidate_moves, check_win, find_winner, pick_random};

/// Snapshot of a position together with its terminal status.
///
/// A state is in exactly one of three conditions: in progress, terminal
/// with a winner (someone completed five), or terminal without a winner
/// (the candidate area ran out of empty cells).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    to_move: Stone,
    last_move: Option<Pos>,
    winner: Option<Stone>,
    terminal: bool,
}

impl BoardState {
    /// Wrap a caller-supplied position. `to_move` must be black or white.
    ///
    /// Any five already on the board makes the state terminal.
    pub fn new(board: Board, to_move: Stone) -> Self {
        let winner = find_winner(&board);
        Self {
            board,
            to_move,
            last_move: None,
            winner,
            terminal: winner.is_some(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Put the side to move's stone on `pos` and pass the turn.
    ///
    /// Returns `false` without touching anything if the cell is taken
    /// or off the board.
    pub fn place(&mut self, pos: Pos) -> bool {
        if !self.board.is_empty(pos) {
            return false;
        }
        self.board.place_stone(pos, self.to_move);
        self.to_move = self.to_move.opponent();
        self.last_move = Some(pos);
        true
    }

    /// Place a stone and record a win if it completes five.
    pub fn play(&mut self, pos: Pos) -> bool {
        if !self.place(pos) {
            return false;
        }
        if let Some(winner) = check_win(&self.board, pos) {
            self.winner = Some(winner);
            self.terminal = true;
        }
        true
    }

    /// Candidate moves for this position.
    ///
    /// When the padded box around the stones has no empty cell left the
    /// state becomes terminal without a winner and the result is empty.
    pub fn candidate_moves(&mut self) -> Vec<Pos> {
        let moves = candidate_moves(&self.board);
        if moves.is_empty() {
            self.terminal = true;
        }
        moves
    }

    /// Draw a move uniformly from the candidates, `None` if there are none.
    pub fn random_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Pos> {
        let moves = self.candidate_moves();
        pick_random(&moves, rng)
    }

    /// Close a game that ran out of moves, crediting `winner`.
    pub fn force_result(&mut self, winner: Stone) {
        self.winner = Some(winner);
        self.terminal = true;
    }

    /// Play random moves until the game ends and return the winner.
    ///
    /// Exhausting the candidate area hands the game to `exhausted_winner`.
    pub fn rollout<R: Rng + ?Sized>(mut self, rng: &mut R, exhausted_winner: Stone) -> Stone {
        while !self.terminal {
            match self.random_move(rng) {
                Some(pos) => {
                    self.play(pos);
                }
                None => self.force_result(exhausted_winner),
            }
        }
        self.winner.unwrap_or(exhausted_winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_place_flips_turn() {
        let mut state = BoardState::new(Board::new(), Stone::Black);
        assert!(state.place(Pos::new(5, 5)));
        assert_eq!(state.board().get(Pos::new(5, 5)), Stone::Black);
        assert_eq!(state.to_move(), Stone::White);
        assert_eq!(state.last_move(), Some(Pos::new(5, 5)));
    }

    #[test]
    fn test_place_on_occupied_fails_without_mutation() {
        let mut state = BoardState::new(Board::new(), Stone::Black);
        state.place(Pos::new(5, 5));
        let before = state.clone();
        assert!(!state.place(Pos::new(5, 5)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_place_off_board_fails() {
        let mut state = BoardState::new(Board::new(), Stone::White);
        assert!(!state.place(Pos::new(11, 3)));
        assert_eq!(state.to_move(), Stone::White);
    }

    #[test]
    fn test_play_detects_win() {
        let mut board = Board::new();
        for r in 3..7 {
            board.place_stone(Pos::new(r, 5), Stone::Black);
        }
        let mut state = BoardState::new(board, Stone::Black);
        assert!(!state.is_terminal());

        state.play(Pos::new(7, 5));
        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_existing_five_is_terminal() {
        let mut board = Board::new();
        for c in 0..5 {
            board.place_stone(Pos::new(0, c), Stone::White);
        }
        let state = BoardState::new(board, Stone::Black);
        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(Stone::White));
    }

    #[test]
    fn test_exhausted_candidates_mark_terminal() {
        let board: Board = "bw\nwb".parse().unwrap();
        let mut state = BoardState::new(board, Stone::Black);
        assert!(state.candidate_moves().is_empty());
        assert!(state.is_terminal());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_rollout_of_exhausted_board_uses_forced_winner() {
        let board: Board = "bw\nwb".parse().unwrap();
        let state = BoardState::new(board, Stone::Black);
        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(state.rollout(&mut rng, Stone::White), Stone::White);
    }

    #[test]
    fn test_rollout_reaches_a_result() {
        let mut rng = Pcg64::seed_from_u64(42);
        for _ in 0..20 {
            let state = BoardState::new(Board::new(), Stone::Black);
            let winner = state.rollout(&mut rng, Stone::White);
            assert_ne!(winner, Stone::Empty);
        }
    }
}
