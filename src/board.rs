use std::fmt::Debug;

/// The central trait of the library, defining the interface for a game state.
///
/// The tree search only talks to a game through this trait: it asks who is to move,
/// whether someone has already won, which moves are available, and applies them to copies
/// of the board while expanding the tree.
pub trait Board: Default + Clone {
    /// The type representing a move in the game.
    type Move: Copy + Debug + PartialEq;

    /// Returns the mark whose turn it is to move. Never `Mark::Empty`.
    fn get_current_mark(&self) -> Mark;

    /// Returns the mark that completed a line, or `Mark::Empty` when nobody has.
    ///
    /// A drawn (full) board and an ongoing game both return `Mark::Empty`.
    fn get_winner(&self) -> Mark;

    /// Returns all legal moves in a fixed order. Empty once the game is over.
    fn get_available_moves(&self) -> Vec<Self::Move>;

    /// Applies a given move to the board, placing the current mark and passing the turn.
    fn perform_move(&mut self, b_move: &Self::Move);

    /// Returns a hash value for the current board state.
    fn get_hash(&self) -> u128;

    /// Returns the current outcome of the game.
    fn get_outcome(&self) -> GameOutcome {
        match self.get_winner() {
            Mark::Empty if self.get_available_moves().is_empty() => GameOutcome::Draw,
            Mark::Empty => GameOutcome::InProgress,
            winner => GameOutcome::Won(winner),
        }
    }
}

/// A cell value and, for non-empty values, the player owning it.
///
/// The numeric encoding is part of the scoring: line sums of `±3` mean a completed line
/// and terminal scores are `winner.value() * WINNERS_GAIN`.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
#[repr(i8)]
pub enum Mark {
    /// The side that moves first on an empty board.
    X = -1,
    #[default]
    Empty = 0,
    O = 1,
}

impl Mark {
    /// Returns the numeric value of the mark: -1, 0 or 1.
    pub const fn value(self) -> i32 {
        self as i8 as i32
    }

    /// Converts a raw cell value into a mark.
    pub const fn from_value(value: i8) -> Option<Mark> {
        match value {
            -1 => Some(Mark::X),
            0 => Some(Mark::Empty),
            1 => Some(Mark::O),
            _ => None,
        }
    }

    /// Returns the other player. `Empty` stays `Empty`.
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// The given mark completed a line.
    Won(Mark),
    /// The board is full and nobody completed a line.
    Draw,
}
