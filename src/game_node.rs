use crate::board::{Board, GameOutcome, Mark};

/// Points awarded for a completed line, signed by the winning mark.
pub const WINNERS_GAIN: i32 = 100;

/// Represents a single position in the game tree.
///
/// A node is created once, when its parent is expanded (or as the root), and is only
/// written to again by the scoring pass. Parent and children links are kept by the tree
/// that owns the node.
#[derive(Debug, Clone)]
pub struct GameNode<T: Board> {
    /// The depth of the node below the root of its tree.
    pub height: u32,
    /// The game state that this node represents.
    pub board: Box<T>,
    /// The move that led to this node's state from its parent. `None` for the root node.
    pub prev_move: Option<T::Move>,
    /// The mark whose turn it is in this node's game state.
    pub current_mark: Mark,
    /// The mark that completed a line in this node's state, `Mark::Empty` if none did.
    pub winner: Mark,
    /// The backed-up score, in `[-WINNERS_GAIN, WINNERS_GAIN]` once the tree is built.
    /// Positive values favour `Mark::O`.
    pub score: i32,
}

impl<T: Board> Default for GameNode<T> {
    fn default() -> Self {
        GameNode::new(Box::new(T::default()))
    }
}

impl<T: Board> GameNode<T> {
    /// Creates a new unscored `GameNode` for the given board state.
    pub fn new(boxed_board: Box<T>) -> Self {
        let current_mark = boxed_board.get_current_mark();
        let winner = boxed_board.get_winner();
        GameNode {
            height: 0,
            board: boxed_board,
            prev_move: None,
            current_mark,
            winner,
            score: 0,
        }
    }

    /// Creates the node reached by playing `b_move` from `parent`.
    pub fn child_of(parent: &GameNode<T>, b_move: T::Move) -> Self {
        let mut board = parent.board.clone();
        board.perform_move(&b_move);
        let mut node = GameNode::new(board);
        node.prev_move = Some(b_move);
        node.height = parent.height + 1;
        node
    }

    /// Whether a line has been completed in this node.
    pub fn is_won(&self) -> bool {
        self.winner != Mark::Empty
    }

    /// Score of a won position, `None` otherwise.
    pub fn terminal_score(&self) -> Option<i32> {
        self.is_won().then(|| self.winner.value() * WINNERS_GAIN)
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.get_outcome()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Mark;
    use crate::boards::tic_tac_toe::TicTacToeBoard;
    use crate::game_node::GameNode;

    #[test]
    fn child_differs_by_one_cell() {
        // arrange
        let board = TicTacToeBoard::try_from([[-1, 0, 0], [0, 0, 0], [0, 0, 1]]).unwrap();
        let parent = GameNode::new(Box::new(board));

        // act
        let child = GameNode::child_of(&parent, 1);

        // assert
        assert_eq!(child.prev_move, Some(1));
        assert_eq!(child.height, 1);
        assert_eq!(child.current_mark, Mark::O);
        assert_eq!(child.board.to_marks(), [[-1, -1, 0], [0, 0, 0], [0, 0, 1]]);
        assert_eq!(parent.board.to_marks(), [[-1, 0, 0], [0, 0, 0], [0, 0, 1]]);
    }

    #[test]
    fn terminal_score_is_signed_gain() {
        let o_wins = TicTacToeBoard::try_from([[1, 1, 1], [-1, -1, 0], [-1, 0, 0]]).unwrap();
        let x_wins = TicTacToeBoard::try_from([[-1, -1, -1], [1, 1, 0], [1, 0, 0]]).unwrap();
        let ongoing = TicTacToeBoard::default();

        assert_eq!(GameNode::new(Box::new(o_wins)).terminal_score(), Some(100));
        assert_eq!(GameNode::new(Box::new(x_wins)).terminal_score(), Some(-100));
        assert_eq!(GameNode::new(Box::new(ongoing)).terminal_score(), None);
    }
}
