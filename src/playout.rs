use crate::board::{Board, GameOutcome, Mark};
use crate::game_node::GameNode;
use crate::minimax::MinimaxTree;
use ego_tree::{NodeId, NodeRef};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Picks the reply for the side the engine does not play.
pub trait Opponent<T: Board> {
    /// Chooses one of `candidates` (the children of the current position, in move order).
    /// Returning `None` stops the game where it is.
    fn choose_move<'a>(
        &mut self,
        candidates: &[NodeRef<'a, GameNode<T>>],
    ) -> Option<NodeRef<'a, GameNode<T>>>;
}

/// Replies uniformly at random.
pub struct RandomOpponent<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOpponent<StdRng> {
    /// A reproducible opponent: the same seed replays the same game.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<T: Board, R: Rng> Opponent<T> for RandomOpponent<R> {
    fn choose_move<'a>(
        &mut self,
        candidates: &[NodeRef<'a, GameNode<T>>],
    ) -> Option<NodeRef<'a, GameNode<T>>> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Replies with a fixed list of moves, one per turn, then stops.
///
/// A scripted move that is not available in the current position stops the game too.
pub struct ScriptedOpponent<M> {
    moves: std::vec::IntoIter<M>,
}

impl<M> ScriptedOpponent<M> {
    pub fn new(moves: Vec<M>) -> Self {
        Self {
            moves: moves.into_iter(),
        }
    }
}

impl<T: Board> Opponent<T> for ScriptedOpponent<T::Move> {
    fn choose_move<'a>(
        &mut self,
        candidates: &[NodeRef<'a, GameNode<T>>],
    ) -> Option<NodeRef<'a, GameNode<T>>> {
        let b_move = self.moves.next()?;
        candidates
            .iter()
            .find(|c| c.value().prev_move == Some(b_move))
            .copied()
    }
}

/// A single game played through a built tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Playout<M> {
    /// Visited nodes after the root, in play order.
    pub nodes: Vec<NodeId>,
    /// The moves that were played, in play order.
    pub moves: Vec<M>,
    /// The outcome at the last visited position.
    pub outcome: GameOutcome,
}

/// Plays from the root of `tree` until the game is over or the opponent stops.
///
/// Whenever `engine_mark` is to move the engine takes `get_optimal_move`; otherwise the
/// opponent picks among the children.
pub fn play_out<T: Board, O: Opponent<T>>(
    tree: &MinimaxTree<T>,
    engine_mark: Mark,
    opponent: &mut O,
) -> Playout<T::Move> {
    let mut current = tree.get_root();
    let mut nodes = Vec::new();
    let mut moves = Vec::new();

    loop {
        let next = if current.value().current_mark == engine_mark {
            tree.get_optimal_move(current.id())
        } else {
            let candidates: Vec<_> = current.children().collect();
            opponent.choose_move(&candidates)
        };

        let Some(next) = next else {
            break;
        };
        nodes.push(next.id());
        moves.extend(next.value().prev_move);
        current = next;
    }

    let outcome = current.value().outcome();
    debug!(
        "playout with engine as {:?} ended after {} moves: {:?}",
        engine_mark,
        moves.len(),
        outcome
    );
    Playout {
        nodes,
        moves,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{GameOutcome, Mark};
    use crate::boards::tic_tac_toe::TicTacToeBoard;
    use crate::minimax::MinimaxTree;
    use crate::playout::{RandomOpponent, ScriptedOpponent, play_out};

    fn tree_from(marks: [[i8; 3]; 3]) -> MinimaxTree<TicTacToeBoard> {
        MinimaxTree::from_board(TicTacToeBoard::try_from(marks).unwrap())
    }

    #[test]
    fn engine_as_x_never_loses_to_random_replies() {
        // arrange
        let tree = MinimaxTree::from_board(TicTacToeBoard::default());

        for seed in 0..50 {
            // act
            let playout = play_out(&tree, Mark::X, &mut RandomOpponent::seeded(seed));

            // assert
            assert_ne!(playout.outcome, GameOutcome::Won(Mark::O), "seed {seed}");
            assert_eq!(playout.moves.first(), Some(&4));
            assert_ne!(playout.outcome, GameOutcome::InProgress);
        }
    }

    #[test]
    fn same_seed_replays_same_game() {
        let tree = tree_from([[-1, 0, 0], [0, 0, 0], [0, 0, 1]]);

        let first = play_out(&tree, Mark::O, &mut RandomOpponent::seeded(7));
        let second = play_out(&tree, Mark::O, &mut RandomOpponent::seeded(7));

        assert_eq!(first, second);
        assert_eq!(
            tree.get_move_history(*first.nodes.last().unwrap()),
            first.moves
        );
    }

    #[test]
    fn scripted_replies_follow_the_script() {
        // arrange
        let tree = tree_from([[-1, 0, 0], [0, 0, 0], [0, 0, 1]]);
        let mut opponent = ScriptedOpponent::new(vec![1, 4, 3]);

        // act
        let playout = play_out(&tree, Mark::X, &mut opponent);

        // assert
        assert_eq!(playout.moves, vec![2, 1, 6, 4, 3]);
        assert_eq!(playout.outcome, GameOutcome::Won(Mark::X));
    }

    #[test]
    fn unavailable_scripted_move_stops_the_game() {
        let tree = tree_from([[-1, 0, 0], [0, 0, 0], [0, 0, 1]]);
        let mut opponent = ScriptedOpponent::new(vec![8]);

        let playout = play_out(&tree, Mark::X, &mut opponent);

        assert_eq!(playout.moves, vec![2]);
        assert_eq!(playout.outcome, GameOutcome::InProgress);
    }

    #[test]
    fn engine_completes_a_winning_line() {
        let tree = tree_from([[1, 1, 0], [-1, -1, 0], [-1, 0, 0]]);

        let playout = play_out(&tree, Mark::O, &mut ScriptedOpponent::new(Vec::new()));

        assert_eq!(playout.moves, vec![2]);
        assert_eq!(playout.outcome, GameOutcome::Won(Mark::O));
    }

    #[test]
    fn finished_position_plays_nothing() {
        let tree = tree_from([[-1, 1, -1], [-1, 1, 1], [1, -1, -1]]);

        let playout = play_out(&tree, Mark::X, &mut RandomOpponent::seeded(1));

        assert!(playout.nodes.is_empty());
        assert_eq!(playout.outcome, GameOutcome::Draw);
    }
}
