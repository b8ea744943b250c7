//! Terminal Arena
//!
//! A line-based front end: browse and search the roster, put a creature in
//! each slot, battle, reset. Pass `--offline` to use the built-in roster
//! instead of the PokeAPI catalog.
//!
//! Set `RUST_LOG=arena_client=debug` to see declined intents.

use anyhow::Result;
use arena_client::{
    ArenaHandler, ArenaSession, BattleState, CreatureDetail, CreatureSummary, PlayerSlot,
    PokeApiProvider, Selection, SessionConfig, StaticRoster, Verdict, dispatch_event,
    filter_roster, format_power, type_color,
};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Presentation state: the roster and the search text
struct Terminal {
    roster: Vec<CreatureSummary>,
    search: String,
}

impl Terminal {
    fn print_roster(&self) {
        let matches = filter_roster(&self.roster, &self.search);
        if matches.is_empty() {
            println!("No creature matches {:?}", self.search);
            return;
        }
        let names: Vec<String> = matches.iter().map(|c| c.display_name()).collect();
        for row in names.chunks(6) {
            println!("  {}", row.join("  "));
        }
    }
}

#[async_trait]
impl ArenaHandler for Terminal {
    async fn on_slot_changed(&mut self, slot: PlayerSlot, creature: Option<&CreatureDetail>) {
        match creature {
            Some(creature) => print_card(slot, creature),
            None => println!("[{}] emptied, select a creature", slot),
        }
    }

    async fn on_resolution_started(&mut self) {
        println!("Battling...");
    }

    async fn on_verdict(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Draw => println!("⚔️ {} ⚔️", verdict),
            _ => println!("{} 🎉", verdict),
        }
    }

    async fn on_cleared(&mut self) {
        self.search.clear();
        println!("Arena cleared");
    }
}

fn print_card(slot: PlayerSlot, creature: &CreatureDetail) {
    let types: Vec<String> = creature
        .types
        .iter()
        .map(|t| format!("{} ({})", t, type_color(t)))
        .collect();

    println!("[{}] {}", slot, creature.display_name());
    if let Some(image) = &creature.image {
        println!("    sprite: {}", image);
    }
    println!("    types: {}", types.join(", "));
    println!(
        "    ❤️ {}  ⚔️ {}  🛡️ {}",
        creature.stats.hp, creature.stats.attack, creature.stats.defense
    );
    println!("    abilities: {}", creature.top_abilities(2).join(", "));
}

fn print_state(state: &BattleState) {
    for slot in PlayerSlot::ALL {
        match state.creature(slot) {
            Some(creature) => println!(
                "[{}] {} - power {}",
                slot,
                creature.display_name(),
                format_power(creature.power())
            ),
            None if state.slot(slot).is_pending() => println!("[{}] loading...", slot),
            None => println!("[{}] empty", slot),
        }
    }
    if state.is_resolving() {
        println!("Battling...");
    } else if let Some(verdict) = state.verdict() {
        println!("Result: {}", verdict);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list                 show the (filtered) roster");
    println!("  search <text>        filter the roster; empty text shows all");
    println!("  pick <name>          put a creature in the first empty slot");
    println!("  p1 <name> | p2 <name>  put a creature in a specific slot");
    println!("  battle               resolve the battle");
    println!("  reset                clear both slots");
    println!("  show                 print both slots and the result");
    println!("  quit");
}

/// Fetch a creature in the background
///
/// The command loop keeps reading meanwhile, so a `reset` typed during the
/// fetch cancels it.
fn spawn_selection(session: &ArenaSession, slot: Option<PlayerSlot>, name: &str) {
    let session = session.clone();
    let name = name.to_string();
    tokio::spawn(async move {
        let selection = match slot {
            Some(slot) => session.select_creature(slot, &name).await,
            None => session.choose(&name).await,
        };
        match selection {
            Ok(Selection::Filled(_)) => {}
            Ok(Selection::Declined) => println!("No free slot for {}", name),
            Ok(Selection::Cancelled) => println!("Selection of {} cancelled", name),
            Err(e) => println!("Error: {}", e),
        }
    });
}

/// Returns false when the user asked to quit
fn handle_command(session: &ArenaSession, terminal: &mut Terminal, line: &str) -> bool {
    let (command, arg) = match line.trim().split_once(' ') {
        Some((command, arg)) => (command, arg.trim()),
        None => (line.trim(), ""),
    };

    match command {
        "" => {}
        "quit" | "exit" => return false,
        "help" => print_help(),
        "list" => terminal.print_roster(),
        "search" => {
            terminal.search = arg.to_string();
            terminal.print_roster();
        }
        "show" => print_state(&session.snapshot()),
        "battle" => {
            if session.battle().is_none() {
                println!("Pick two creatures first (or wait for the current battle)");
            }
        }
        "reset" => session.reset(),
        "pick" => spawn_selection(session, None, arg),
        other => match PlayerSlot::parse(other) {
            Some(slot) => spawn_selection(session, Some(slot), arg),
            None => println!("Unknown command {:?}, try `help`", other),
        },
    }
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let offline = std::env::args().any(|a| a == "--offline");
    let (session, mut events) = if offline {
        ArenaSession::new(StaticRoster::starters(), SessionConfig::default())
    } else {
        ArenaSession::new(PokeApiProvider::new(), SessionConfig::default())
    };

    println!("Creature Battle Arena");
    println!("Loading roster...");
    let roster = session.list_roster().await?;
    let mut terminal = Terminal {
        roster,
        search: String::new(),
    };
    terminal.print_roster();
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_command(&session, &mut terminal, &line) {
                    break;
                }
            }
            Some(event) = events.recv() => {
                dispatch_event(&mut terminal, event).await;
            }
        }
    }

    Ok(())
}
