//! Exhaustive game-tree search for tic-tac-toe.
//!
//! Given any board, the library materializes every continuation down to the finished games,
//! scores finished games as `±100`, backs the scores up to the root as damped averages, and
//! then picks moves by looking one ply ahead at those scores. Deeper outcomes are discounted by
//! 9/10 per ply, so quicker wins and slower losses are preferred.
//!
//! The backup averages children instead of taking their minimum or maximum, so it is not a
//! true minimax: the first mover never loses from the empty board by following the engine,
//! the second mover can be beaten. See [`minimax::MinimaxTree`].
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
//! use minimax_lib::minimax::{MinimaxTree, DEFAULT_NODE_CAPACITY};
//!
//! // Two marks placed; X is to move because the fill count is even
//! let board = TicTacToeBoard::try_from([[-1, 0, 0], [0, 0, 0], [0, 0, 1]])?;
//!
//! // Build and score the whole tree below the board
//! let tree = MinimaxTree::builder(board)
//!     .with_node_capacity(DEFAULT_NODE_CAPACITY)
//!     .build();
//!
//! // Get the best move for the side to move
//! let best_move_node = tree.get_root_optimal_move().expect("game is not over");
//! let best_move = best_move_node.value().prev_move;
//!
//! println!("The best move is: {:?}", best_move);
//! # Ok::<(), minimax_lib::error::Error>(())
//! ```

/// Contains the `Board` trait and related types that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait.
pub mod boards;
/// Input validation errors.
pub mod error;
/// Contains the `GameNode` struct, which represents a position in the game tree.
pub mod game_node;
/// Tree fingerprinting.
pub mod hash;
/// The core module of the library, containing the `MinimaxTree` implementation.
pub mod minimax;
/// Plays games through a built tree against an opponent strategy.
pub mod playout;
