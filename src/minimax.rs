use crate::board::Board;
use crate::game_node::GameNode;
use crate::hash::MurMurHasher;
use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use log::{debug, trace};
use std::fmt::Write;

/// Initial arena capacity. The tree grows past it as needed.
pub const DEFAULT_NODE_CAPACITY: usize = 1024;

/// Numerator of the per-ply damping factor applied to child scores.
pub const EROSION_RATE: i32 = 9;

/// Denominator of the per-ply damping factor.
pub const EROSION_DENOMINATOR: i32 = 10;

/// A fully expanded and scored game tree.
///
/// Building the tree is a single blocking call: every position reachable from the root board
/// is materialized depth-first (no pruning, no sharing of transpositions), then every node is
/// scored bottom-up. After that the tree is read-only.
///
/// Scores are signed from the point of view of `Mark::O`. A won position scores
/// `±WINNERS_GAIN`; any other position with children scores the truncated average of its
/// children's scores, each damped by 9/10 with truncating integer division; a position with
/// neither scores 0. Every score therefore stays within `[-WINNERS_GAIN, WINNERS_GAIN]`.
///
/// # Limitations
///
/// Averaging the children is not a true minimax backup: a reply that loses outright can be
/// outweighed by many replies that go well. From the empty board the side moving first (`X`)
/// never loses by following `get_optimal_move`, but the second side (`O`) can be beaten.
/// Boards with two completed lines are not rejected; they score by the first line found.
pub struct MinimaxTree<T: Board> {
    tree: Tree<GameNode<T>>,
}

/// A builder for creating instances of `MinimaxTree`.
pub struct MinimaxTreeBuilder<T: Board> {
    board: T,
    node_capacity: usize,
}

impl<T: Board> MinimaxTreeBuilder<T> {
    /// Creates a new builder with the given root board state.
    pub fn new(board: T) -> Self {
        Self {
            board,
            node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }

    /// Pre-allocates room for `capacity` nodes.
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Expands and scores the whole tree.
    pub fn build(self) -> MinimaxTree<T> {
        MinimaxTree::new(self.board, self.node_capacity)
    }
}

impl<T: Board> MinimaxTree<T> {
    /// Returns a new builder for `MinimaxTree`.
    pub fn builder(board: T) -> MinimaxTreeBuilder<T> {
        MinimaxTreeBuilder::new(board)
    }

    /// Builds the tree with default settings.
    pub fn from_board(board: T) -> Self {
        MinimaxTreeBuilder::new(board).build()
    }

    /// Creates a new `MinimaxTree`, expanding and scoring every reachable position.
    ///
    /// It is recommended to use the builder pattern via `MinimaxTree::builder()` instead.
    pub fn new(board: T, node_capacity: usize) -> Self {
        let root_node = GameNode::new(Box::new(board));
        let mut tree = Tree::with_capacity(root_node, node_capacity);
        Self::expand_node(&mut tree.root_mut());

        let mut scores = Vec::new();
        let root_score = Self::score_node(tree.root(), &mut scores);
        for (node_id, score) in scores {
            if let Some(mut node) = tree.get_mut(node_id) {
                node.value().score = score;
            }
        }

        let minimax = Self { tree };
        debug!(
            "built game tree: {} nodes, root score {}",
            minimax.node_count(),
            root_score
        );
        minimax
    }

    /// Returns an immutable reference to the underlying tree.
    pub fn get_tree(&self) -> &Tree<GameNode<T>> {
        &self.tree
    }

    /// Returns the root node of the tree.
    pub fn get_root(&self) -> NodeRef<'_, GameNode<T>> {
        self.tree.root()
    }

    pub fn get_node(&self, node_id: NodeId) -> Option<NodeRef<'_, GameNode<T>>> {
        self.tree.get(node_id)
    }

    /// Total number of positions in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.tree.nodes().count()
    }

    /// Returns the child that is best for the mark to move at `node_id`.
    ///
    /// `O` takes the highest score and `X` the lowest, computed uniformly as the maximum of
    /// `mark * score`; the first child reaching it wins ties. Returns `None` when the game is
    /// over at that node (or the id is not part of this tree).
    pub fn get_optimal_move(&self, node_id: NodeId) -> Option<NodeRef<'_, GameNode<T>>> {
        let node = self.tree.get(node_id)?;
        let mark = node.value().current_mark.value();

        let mut optimal: Option<NodeRef<'_, GameNode<T>>> = None;
        for child in node.children() {
            if optimal.is_none_or(|best| mark * child.value().score > mark * best.value().score) {
                optimal = Some(child);
            }
        }

        if let Some(child) = optimal {
            trace!(
                "optimal move for {:?}: {:?} (score {})",
                node.value().current_mark,
                child.value().prev_move,
                child.value().score
            );
        }
        optimal
    }

    /// Returns the best child of the root, `None` if the root position is already over.
    pub fn get_root_optimal_move(&self) -> Option<NodeRef<'_, GameNode<T>>> {
        self.get_optimal_move(self.tree.root().id())
    }

    /// Follows optimal moves from the root until the game is over.
    ///
    /// The root itself is not included.
    pub fn get_optimal_line(&self) -> Vec<NodeRef<'_, GameNode<T>>> {
        let mut line = Vec::new();
        let mut current = self.tree.root().id();
        while let Some(next) = self.get_optimal_move(current) {
            line.push(next);
            current = next.id();
        }
        line
    }

    /// Returns the moves leading from the root to `node_id`, oldest first.
    pub fn get_move_history(&self, node_id: NodeId) -> Vec<T::Move> {
        let Some(node) = self.tree.get(node_id) else {
            return Vec::new();
        };

        let mut moves: Vec<T::Move> = std::iter::once(node)
            .chain(node.ancestors())
            .filter_map(|n| n.value().prev_move)
            .collect();
        moves.reverse();
        moves
    }

    /// Returns a Murmur3 fingerprint of every node's board and score, in pre-order.
    ///
    /// Building twice from the same board yields the same fingerprint.
    pub fn get_fingerprint(&self) -> String {
        let mut buffer = String::new();
        for node in self.tree.root().descendants() {
            let game_node = node.value();
            let _ = write!(buffer, "{}:{};", game_node.board.get_hash(), game_node.score);
        }
        MurMurHasher::hash(&buffer)
    }

    /// Appends one child per available move, in move order, expanding each child's whole
    /// subtree before moving on to the next move.
    fn expand_node(node: &mut NodeMut<'_, GameNode<T>>) {
        let possible_moves = node.value().board.get_available_moves();
        for possible_move in possible_moves {
            let child = GameNode::child_of(node.value(), possible_move);
            let mut child_node = node.append(child);
            Self::expand_node(&mut child_node);
        }
    }

    /// Computes the score of `node` after recursing into all of its children, recording
    /// every computed score in post-order.
    fn score_node(
        node: NodeRef<'_, GameNode<T>>,
        scores: &mut Vec<(NodeId, i32)>,
    ) -> i32 {
        let score = if let Some(terminal_score) = node.value().terminal_score() {
            terminal_score
        } else if node.has_children() {
            let mut score_sum = 0;
            let mut children_count = 0;
            for child in node.children() {
                let child_score = Self::score_node(child, scores);
                score_sum += child_score * EROSION_RATE / EROSION_DENOMINATOR;
                children_count += 1;
            }
            score_sum / children_count
        } else {
            0
        };

        scores.push((node.id(), score));
        score
    }
}
