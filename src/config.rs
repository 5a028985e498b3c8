/// Width and height of each side's grid.
pub const GRID_SIZE: usize = 10;

/// Number of ships in a fleet.
pub const FLEET_SIZE: usize = 10;

/// Ship lengths in placement order. Larger ships come first so random
/// placement never has to squeeze them into a nearly full grid.
pub const FLEET: [usize; FLEET_SIZE] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells();

/// Computer "thinking time" between the player's shot and its reply.
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 1000;

const fn fleet_cells() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET_SIZE {
        total += FLEET[i];
        i += 1;
    }
    total
}

/// Runtime settings for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Delay before the computer answers a player shot.
    pub computer_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
        }
    }
}

#[cfg(feature = "std")]
impl GameConfig {
    /// Build a config from `SEABATTLE_SEED` and `SEABATTLE_DELAY_MS`.
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let seed = std::env::var("SEABATTLE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());
        let computer_delay_ms = std::env::var("SEABATTLE_DELAY_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.computer_delay_ms);
        Self {
            seed,
            computer_delay_ms,
        }
    }

    /// The configured delay as a [`std::time::Duration`].
    pub fn computer_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.computer_delay_ms)
    }

    /// Return the fixed seed, or draw a fresh one from the thread RNG.
    pub fn seed_or_random(&self) -> u64 {
        use rand::Rng;
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}
