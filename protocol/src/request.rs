/// Public PokeAPI v2 root
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Requests the catalog understands
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// GET /pokemon?limit=LIMIT
    ListPokemon { limit: usize },

    /// GET /pokemon/NAME
    Pokemon(String),
}

impl Request {
    /// Path and query relative to the API root
    pub fn to_path(&self) -> String {
        match self {
            Self::ListPokemon { limit } => format!("/pokemon?limit={}", limit),
            Self::Pokemon(name) => format!("/pokemon/{}", name.trim().to_lowercase()),
        }
    }

    /// Absolute URL against `base`, tolerating a trailing slash on the base
    pub fn to_url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.to_path())
    }
}
