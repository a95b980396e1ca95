use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect_four_ai::ai::{get_move_with_depth, AiOpponent, Difficulty, SeededRandom};
use connect_four_ai::arena::{run_match, MatchStats};
use connect_four_ai::config::{AiConfig, AppConfig};
use connect_four_ai::game::{Board, Player};

/// Pit Connect Four AI tiers against each other, or ask one for a move.
#[derive(Parser)]
#[command(name = "arena", about = "Connect Four AI arena")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Override the Hard tier's search depth
    #[arg(long, global = true)]
    depth: Option<u32>,

    /// Seed for the random tiers
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match between two difficulties, alternating who starts
    Match {
        /// Number of games
        #[arg(long)]
        games: Option<usize>,

        /// Difficulty of the first agent
        #[arg(long)]
        first: Option<Difficulty>,

        /// Difficulty of the second agent
        #[arg(long)]
        second: Option<Difficulty>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the column the AI would play on a board
    Suggest {
        /// Rows top to bottom separated by '/', using '.', 'X' and 'O'
        #[arg(long)]
        board: String,

        /// Side the AI plays: 1 (X) or 2 (O)
        #[arg(long, value_parser = parse_player)]
        player: Player,

        /// Difficulty to play at
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s {
        "1" | "one" | "x" | "X" => Ok(Player::One),
        "2" | "two" | "o" | "O" => Ok(Player::Two),
        other => Err(format!("unknown player '{other}' (expected 1 or 2)")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        app_config.ai.search_depth = depth;
    }
    if let Some(seed) = cli.seed {
        app_config.ai.seed = Some(seed);
    }

    match cli.command {
        Command::Match {
            games,
            first,
            second,
            json,
        } => {
            if let Some(games) = games {
                app_config.arena.games = games;
            }
            if let Some(first) = first {
                app_config.arena.first = first;
            }
            if let Some(second) = second {
                app_config.arena.second = second;
            }
            app_config.validate().context("invalid match settings")?;
            play_match(&app_config, json)
        }
        Command::Suggest {
            board,
            player,
            difficulty,
        } => {
            if let Some(difficulty) = difficulty {
                app_config.ai.difficulty = difficulty;
            }
            app_config.validate().context("invalid AI settings")?;
            suggest(&app_config.ai, &board, player)
        }
    }
}

fn play_match(config: &AppConfig, json: bool) -> Result<()> {
    let seed = config.ai.seed;
    let agent_config = |difficulty: Difficulty, offset: u64| AiConfig {
        difficulty,
        seed: seed.map(|s| s.wrapping_add(offset)),
        ..config.ai.clone()
    };
    let mut first = AiOpponent::from_config(&agent_config(config.arena.first, 0));
    let mut second = AiOpponent::from_config(&agent_config(config.arena.second, 1));

    if !json {
        println!(
            "Playing {} games: {} vs {} (search depth {})",
            config.arena.games, config.arena.first, config.arena.second, config.ai.search_depth
        );
        println!("-------------------------------------------");
    }

    let stats = run_match(&mut first, &mut second, config.arena.games)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_summary(&stats);
    }
    Ok(())
}

fn print_summary(stats: &MatchStats) {
    println!("-------------------------------------------");
    println!(
        "{}: {} wins ({:.1}%)",
        stats.first_name,
        stats.first_wins,
        stats.first_win_rate() * 100.0
    );
    println!("{}: {} wins", stats.second_name, stats.second_wins);
    println!("Draws: {}", stats.draws);
    println!("Average game length: {:.1} moves", stats.average_game_length());
}

fn suggest(config: &AiConfig, board: &str, player: Player) -> Result<()> {
    let board: Board = board.parse().context("parsing --board")?;
    if let Some((winner, _)) = board.winner() {
        bail!("{} has already won this board", winner.name());
    }

    let mut rng = match config.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    match get_move_with_depth(&board, player, config.difficulty, config.search_depth, &mut rng) {
        Some(col) => println!("{col}"),
        None => println!("no legal move"),
    }
    Ok(())
}
