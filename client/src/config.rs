use std::time::Duration;

pub use arena_protocol::POKEAPI_URL;

/// Dwell between a battle starting and its verdict
pub const DEFAULT_RESOLUTION_DELAY: Duration = Duration::from_millis(1500);

/// Upper bound on a single roster or detail fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// How many creatures the catalog listing asks for
pub const DEFAULT_ROSTER_LIMIT: usize = 151;

/// Timing of an arena session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub resolution_delay: Duration,
    pub fetch_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resolution_delay: DEFAULT_RESOLUTION_DELAY,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl SessionConfig {
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }
}

/// Where the HTTP roster provider reads from
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    pub base_url: String,
    pub roster_limit: usize,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            roster_limit: DEFAULT_ROSTER_LIMIT,
        }
    }
}

impl PokeApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_roster_limit(mut self, limit: usize) -> Self {
        self.roster_limit = limit;
        self
    }
}
