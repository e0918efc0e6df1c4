use clash_backend::config::{GameConfig, StoreConfig, TickerConfig};
use clash_backend::infra::state::build_state;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

mod telemetry;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment.
    let (game_config, store_config, ticker_config) =
        match (GameConfig::from_env(), StoreConfig::from_env(), TickerConfig::from_env()) {
            (Ok(game), Ok(store), Ok(ticker)) => (game, store, ticker),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                eprintln!("❌ Invalid configuration: {e}");
                std::process::exit(1);
            }
        };

    info!(
        store = ?store_config.kind,
        max_rounds = game_config.max_rounds,
        turn_interval_secs = game_config.turn_interval.as_secs(),
        tick_secs = ticker_config.tick_interval.as_secs(),
        "Starting turn ticker"
    );

    if store_config.is_ephemeral() {
        warn!("STORE_KIND is memory: game state lives only in this process and is lost on exit");
    }

    let app_state = match build_state()
        .with_config(game_config)
        .with_store_config(store_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = app_state.init_or_get(None).await {
        warn!(error = %e, "Could not load game state at startup");
    }

    let mut ticker = tokio::time::interval(ticker_config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match app_state.process_turn_if_due().await {
                    Ok(report) if report.processed => info!(message = %report.message, "Tick"),
                    Ok(_) => {}
                    Err(e) if e.is_retryable() => warn!(code = %e.code(), error = %e, "Tick failed"),
                    Err(e) => error!(code = %e.code(), error = %e, "Tick failed"),
                }
            }
            _ = &mut shutdown => {
                info!("Shutting down turn ticker");
                break;
            }
        }
    }
}
