//! Quick Battle
//!
//! Fetches two creatures by name and battles them:
//!
//! ```text
//! cargo run --example quick_battle -- charizard blastoise
//! cargo run --example quick_battle -- --offline pikachu eevee
//! ```

use anyhow::{Result, bail};
use arena_client::{
    ArenaSession, PlayerSlot, PokeApiProvider, SessionConfig, StaticRoster, format_power,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let offline = args.iter().any(|a| a == "--offline");
    let names: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    let [first, second] = names.as_slice() else {
        bail!("usage: quick_battle [--offline] <creature> <creature>");
    };

    let (session, _events) = if offline {
        ArenaSession::new(StaticRoster::starters(), SessionConfig::default())
    } else {
        ArenaSession::new(PokeApiProvider::new(), SessionConfig::default())
    };

    session.select_creature(PlayerSlot::Player1, first).await?;
    session.select_creature(PlayerSlot::Player2, second).await?;

    let state = session.snapshot();
    for slot in PlayerSlot::ALL {
        if let Some(creature) = state.creature(slot) {
            println!(
                "{}: {} (power {})",
                slot,
                creature.display_name(),
                format_power(creature.power())
            );
        }
    }

    let Some(resolution) = session.battle() else {
        bail!("both creatures must be loaded before battling");
    };
    match resolution.verdict().await {
        Some(verdict) => println!("{}", verdict),
        None => println!("Battle was cancelled"),
    }

    Ok(())
}
