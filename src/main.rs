//! Gomoku MCTS engine CLI
//!
//! `decide` reads a board and prints the engine's move as `row col`.
//! `selfplay` lets two engines play a full game from an empty board.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use gomoku::{Board, BoardState, EngineConfig, MctsEngine, Stone};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Five-in-a-row move engine using Monte-Carlo Tree Search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a move for a board read from a file or stdin
    Decide {
        /// Board file, one row per line ('.', 'b', 'w'); stdin if omitted
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Side to move
        #[arg(short = 'm', long, value_enum, default_value = "black")]
        to_move: Side,

        #[command(flatten)]
        search: SearchArgs,
    },
    /// Play a game between two engines and print the result
    Selfplay {
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Thinking time per move in milliseconds
    #[arg(short, long, default_value_t = 15_000)]
    time_ms: u64,

    /// Stop after this many iterations per move
    #[arg(short, long)]
    iterations: Option<u64>,

    /// UCT exploration constant
    #[arg(short, long, default_value_t = 2.0)]
    exploration: f64,

    /// Board size
    #[arg(long, default_value_t = gomoku::BOARD_SIZE)]
    size: usize,

    /// Seed for reproducible searches
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

impl SearchArgs {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            board_size: self.size,
            time_limit: Duration::from_millis(self.time_ms),
            exploration: self.exploration,
            max_iterations: self.iterations,
            ..EngineConfig::default()
        }
    }

    fn engine(&self, board: Board, to_move: Stone, turn: u64) -> gomoku::error::Result<MctsEngine> {
        match self.seed {
            Some(seed) => MctsEngine::seeded(board, to_move, self.config(), seed.wrapping_add(turn)),
            None => MctsEngine::new(board, to_move, self.config()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init(); // Log to stderr (set RUST_LOG=debug for search stats)

    let cli = Cli::parse();
    match cli.command {
        Command::Decide { board, to_move, search } => {
            let text = match board {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let board: Board = text.parse()?;

            let mut engine = search.engine(board, to_move.into(), 0)?;
            let pos = engine.decide()?;
            println!("{} {}", pos.row, pos.col);
        }
        Command::Selfplay { search } => selfplay(&search)?,
    }
    Ok(())
}

fn selfplay(search: &SearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = BoardState::new(Board::with_size(search.size), Stone::Black);
    let mut turn = 0u64;

    while !state.is_terminal() {
        if state.clone().candidate_moves().is_empty() {
            break;
        }

        let mut engine = search.engine(state.board().clone(), state.to_move(), turn)?;
        let result = engine.decide_with_stats()?;
        log::info!(
            "move {}: {} plays {} ({} iterations, mean {:.3})",
            turn + 1,
            state.to_move(),
            result.best_move,
            result.iterations,
            result.mean_value
        );

        state.play(result.best_move);
        turn += 1;
    }

    print!("{}", state.board());
    match state.winner() {
        Some(winner) => println!("{winner} wins after {turn} moves"),
        None => println!("no five after {turn} moves, board exhausted"),
    }
    Ok(())
}
