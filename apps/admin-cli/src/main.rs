use std::str::FromStr;

use clap::{Parser, Subcommand};
use clash_backend::domain::standings;
use clash_backend::infra::state::build_state;
use clash_backend::{Action, AppError, AppState, Faction, GameConfig, StoreConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clash-admin")]
#[command(about = "Faction clash operator tool")]
struct Args {
    /// Redis connection URL; falls back to STORE_KIND / REDIS_URL from the environment
    #[arg(long, env = "REDIS_URL", global = true)]
    redis_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show turn, countdown and standings
    Status,
    /// Put a player into a faction
    Join { username: String, faction: String },
    /// Cast a vote on behalf of a player
    Vote {
        username: String,
        action: String,
        target: Option<String>,
    },
    /// Process a turn if one is due
    Tick,
    /// Process a turn now, ignoring the interval
    ForceTurn,
    /// Wipe the game back to its initial state
    Reset,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .compact()
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let state = match connect(args.redis_url.as_deref()).await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&state, args.command).await {
        eprintln!("❌ {} ({})", e, e.code());
        std::process::exit(1);
    }
}

async fn connect(redis_url: Option<&str>) -> Result<AppState, AppError> {
    let store_config = match redis_url {
        Some(url) => StoreConfig::redis(url),
        None => StoreConfig::from_env()?,
    };
    debug!(store = ?store_config.kind, "Connecting");
    if store_config.is_ephemeral() {
        eprintln!(
            "⚠️  Using a throwaway in-memory store; nothing is kept after this command. \
             Set REDIS_URL (or STORE_KIND=redis) to work on a shared game."
        );
    }
    build_state()
        .with_config(GameConfig::from_env()?)
        .with_store_config(store_config)
        .build()
        .await
}

async fn run(state: &AppState, command: Command) -> Result<(), AppError> {
    match command {
        Command::Status => print_status(state).await?,
        Command::Join { username, faction } => {
            let faction = parse_or_exit::<Faction>(&faction);
            let outcome = state.join_faction(&username, faction).await?;
            report(outcome.success, &outcome.message);
        }
        Command::Vote {
            username,
            action,
            target,
        } => {
            let action = parse_or_exit::<Action>(&action);
            let target = target.as_deref().map(parse_or_exit::<Faction>);
            let outcome = state.submit_vote(&username, action, target).await?;
            report(outcome.success, &outcome.message);
        }
        Command::Tick => {
            let report = state.process_turn_if_due().await?;
            println!("{}", report.message);
        }
        Command::ForceTurn => {
            let report = state.force_process_turn().await?;
            println!("{}", report.message);
        }
        Command::Reset => {
            let outcome = state.reset_game().await?;
            println!("{}", outcome.message);
        }
    }
    Ok(())
}

async fn print_status(state: &AppState) -> Result<(), AppError> {
    let game = state.init_or_get(None).await?.game_state;
    let status = state.turn_status().await?;

    println!(
        "Turn {} ({})",
        game.current_turn,
        if game.active { "active" } else { "ended" }
    );
    if status.should_process {
        println!("Next turn: due now");
    } else {
        println!(
            "Next turn in approximately {} minutes",
            status.minutes_remaining
        );
    }
    println!("Players: {}", game.players.len());
    println!();
    for (rank, (faction, stats)) in standings::rank(&game.factions).into_iter().enumerate() {
        println!(
            "{:>2}. {:<6} score {:>4}  hp {:>4}  players {}",
            rank + 1,
            faction,
            stats.score,
            stats.hp,
            game.roster_size(faction)
        );
    }
    if !game.last_turn_results.is_empty() {
        println!();
        for result in &game.last_turn_results {
            println!("- {}", result.result);
        }
    }
    Ok(())
}

fn parse_or_exit<T>(raw: &str) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    }
}

fn report(success: bool, message: &str) {
    if success {
        println!("✅ {message}");
    } else {
        println!("⚠️  {message}");
    }
}
