//! Sim in the terminal.
//!
//! Options: --vertices, --max-vertices, --opponent, --seed
//!
//! Commands at the prompt: move A B, undo, reset [N], show, quit

use clap::{Parser, ValueEnum};
use sim_game::core::{DEFAULT_MAX_VERTICES, DEFAULT_VERTICES};
use sim_game::{
    BoardConfig, Color, GameSnapshot, MoveResult, RandomPlayer, RejectReason, RulesEngine, SimGame,
    UndoResult,
};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(author, version, about = "Play Sim, the triangle game", long_about = None)]
struct Args {
    /// Number of vertices on the circle.
    #[arg(short, long, default_value_t = DEFAULT_VERTICES)]
    vertices: usize,

    /// Largest board `reset N` accepts.
    #[arg(long, default_value_t = DEFAULT_MAX_VERTICES)]
    max_vertices: usize,

    /// Who plays Blue.
    #[arg(long, value_enum, default_value_t = Opponent::Human)]
    opponent: Opponent,

    /// Seed for the random opponent.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Human,
    Random,
}

#[derive(Parser)]
enum Command {
    #[command(about = "Draw the edge between two vertices", alias = "m")]
    Move { a: u8, b: u8 },
    #[command(about = "Take back the last move", alias = "u")]
    Undo,
    #[command(about = "Start over, optionally on a new board size", alias = "r")]
    Reset { vertices: Option<usize> },
    #[command(about = "Print the board", alias = "s")]
    Show,
    #[command(about = "Leave the game", alias = "exit")]
    Quit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = BoardConfig::new(args.vertices).with_max_vertices(args.max_vertices);
    let mut game = SimGame::with_config(config)?;
    let mut opponent = (args.opponent == Opponent::Random).then(|| RandomPlayer::new(args.seed));
    log::info!("starting {}-vertex game", game.vertex_count());

    println!("{}", render(&game.snapshot()));
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::try_parse_from(std::iter::once("sim").chain(line.split_whitespace())) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Show => println!("{}", render(&game.snapshot())),
            Command::Undo if opponent.is_some() => {
                let removed = game.undo_turn(Color::Red);
                if removed.is_empty() {
                    println!("{}", RejectReason::NothingToUndo);
                    continue;
                }
                for edge in &removed {
                    println!("took back {} by {}", edge.key, edge.color);
                }
                println!("{} to move", game.current_color());
            }
            Command::Undo => match game.undo() {
                UndoResult::Applied { removed, next } => {
                    println!("took back {}, {} to move", removed.key, next)
                }
                UndoResult::Rejected(reason) => println!("{}", reason),
            },
            Command::Reset { vertices } => {
                match vertices {
                    Some(n) => {
                        if let Err(e) = game.configure(n) {
                            eprintln!("{}", e);
                            continue;
                        }
                    }
                    None => game.reset(),
                }
                println!("{}", render(&game.snapshot()));
            }
            Command::Move { a, b } => {
                let result = game.play(a, b);
                report(&result);
                if let (MoveResult::Accepted { .. }, Some(player)) = (result, opponent.as_mut()) {
                    if game.current_color() == Color::Blue {
                        if let Some(mv) = player.choose(&game) {
                            println!("Blue draws ({}, {})", mv.a, mv.b);
                            report(&game.apply_move(mv));
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn report(result: &MoveResult) {
    match result {
        MoveResult::Accepted { next, .. } => println!("{} to move", next),
        MoveResult::Win { color, triangle } => {
            println!("{} wins with triangle {}! Type `reset` to play again.", color, triangle)
        }
        MoveResult::Rejected(reason) => println!("{}", reason),
    }
}

fn render(snapshot: &GameSnapshot) -> String {
    let mut out = format!("{} vertices, ", snapshot.vertex_count);
    match snapshot.winning_triangle {
        Some(triangle) => out.push_str(&format!("{} won with {}\n", snapshot.current_color, triangle)),
        None => out.push_str(&format!("{} to move\n", snapshot.current_color)),
    }
    for edge in &snapshot.edges {
        let mark = if snapshot.is_winning_edge(edge.key) { " *" } else { "" };
        out.push_str(&format!("  {} {}{}\n", edge.key, edge.color, mark));
    }
    out.pop();
    out
}
