extern crate minimax_lib;

use minimax_lib::board::Mark;
use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
use minimax_lib::minimax::MinimaxTree;
use minimax_lib::playout::{RandomOpponent, play_out};

fn main() {
    env_logger::init();

    // Same starting position the engine's own test driver used
    let board = match TicTacToeBoard::try_from([[-1, 0, 0], [0, 0, 0], [0, 0, 1]]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid board: {err}");
            std::process::exit(1);
        }
    };

    // Build the full tree below the board
    let tree = MinimaxTree::builder(board).with_node_capacity(8192).build();
    println!("Positions in tree: {}", tree.node_count());

    // Print the score of every candidate move
    let root = tree.get_root();
    for node in root.children() {
        println!("Move: {:?} = {}", node.value().prev_move, node.value().score);
    }

    // Let both sides follow the engine until the game ends
    println!("\n{}", root.value().board);
    for node in tree.get_optimal_line() {
        println!("{}", node.value().board);
    }
    if let Some(last) = tree.get_optimal_line().last() {
        println!("Result: {:?}", last.value().outcome());
    }

    // Engine as X against a random opponent
    let playout = play_out(&tree, Mark::X, &mut RandomOpponent::new(rand::rng()));
    println!(
        "Random playout {:?} ended with {:?}",
        playout.moves, playout.outcome
    );
}
