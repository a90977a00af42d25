use crate::tasks::calculator::History;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env as stdenv;
use tracing::warn;

/// Process environment variable holding a fixed RNG seed.
pub const SEED_VAR: &str = "PRACTICE_TASKS_SEED";

/// Mutable per-session state shared by the commands of one interpreter.
///
/// The environment contains:
/// - `should_exit`: a flag that a REPL loop can check to know when to terminate.
/// - `echo_prompts`: whether prompts are written before reading a line; off when the
///   input is piped so prompts do not end up in the output.
/// - `history`: the last calculator operations, newest first.
/// - the random generator used by the guessing game and the test-data generator.
#[derive(Debug, Clone)]
pub struct Environment {
    /// When set to true, indicates that an interactive loop should exit.
    pub should_exit: bool,
    /// Write prompt messages before reading from input.
    pub echo_prompts: bool,
    /// Calculator operations recorded during this session.
    pub history: History,
    rng: StdRng,
}

impl Environment {
    /// Build a session environment from the current process.
    ///
    /// The RNG is seeded from `PRACTICE_TASKS_SEED` when it holds a valid `u64`,
    /// otherwise from OS entropy.
    pub fn from_process_env() -> Self {
        let rng = match stdenv::var(SEED_VAR) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(seed) => StdRng::seed_from_u64(seed),
                Err(e) => {
                    warn!(value = %raw, error = %e, "ignoring invalid {}", SEED_VAR);
                    StdRng::from_entropy()
                }
            },
            Err(_) => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }

    /// Deterministic environment, mostly useful for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            should_exit: false,
            echo_prompts: false,
            history: History::default(),
            rng,
        }
    }

    /// Random generator shared by all commands of the session.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_process_env()
    }
}
