use thiserror::Error;

pub mod catalog;
pub mod request;
pub mod stat;

pub use catalog::{
    AbilitySlot, NamedResource, PokemonRecord, RosterPage, Sprites, StatEntry, TypeSlot,
    parse_pokemon, parse_roster_page,
};
pub use request::{POKEAPI_URL, Request};
pub use stat::Stat;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
