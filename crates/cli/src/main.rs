use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use settle_core::Piece;
use settle_search::SearchConfig;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "settle", about = "Exhaustive placement search for falling-block puzzles")]
struct Cli {
    #[arg(
        short = 'v',
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE), else RUST_LOG"
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search one piece on one board and print the outcome as JSON.
    Solve {
        #[arg(
            long,
            help = "Text board, one row per line ('#' filled, '.' empty); empty 10x20 if absent"
        )]
        board: Option<PathBuf>,

        #[arg(long, help = "Piece to place (I, O, T, S, Z, J, L)")]
        piece: Piece,

        #[arg(long, default_value = "bfs/height", help = "<strategy>/<heuristic>")]
        config: SearchConfig,
    },
    /// Play a game with one configuration and print the summary as JSON.
    Play {
        #[arg(long, default_value = "bfs/height", help = "<strategy>/<heuristic>")]
        config: SearchConfig,

        #[arg(long, help = "Bag seed; random if absent")]
        seed: Option<u64>,

        #[arg(long, default_value = "100", help = "Stop after this many pieces")]
        pieces: u32,

        #[arg(long, default_value = "10")]
        width: usize,

        #[arg(long, default_value = "20")]
        height: usize,
    },
    /// Play every strategy/heuristic combination over several seeds.
    Compare {
        #[arg(long, default_value = "8", help = "Number of seeds per configuration")]
        seeds: u64,

        #[arg(long, default_value = "100", help = "Piece limit per game")]
        pieces: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Solve {
            board,
            piece,
            config,
        } => commands::solve(board.as_deref(), piece, config),
        Command::Play {
            config,
            seed,
            pieces,
            width,
            height,
        } => commands::play(config, seed, pieces, width, height),
        Command::Compare { seeds, pieces } => commands::compare(seeds, pieces),
    };

    std::process::exit(match result {
        Ok(_) => 0,
        Err(err) => {
            display_error(&err);
            1
        }
    })
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder
        .format(|f, rec| writeln!(f, "{}: {}", rec.level(), rec.args()))
        .target(env_logger::Target::Stderr);
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        2 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn display_error(mut err: &dyn std::error::Error) {
    loop {
        log::error!("{}", err);
        if let Some(src) = err.source() {
            err = src;
        } else {
            break;
        }
    }
}
