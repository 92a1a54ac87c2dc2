use std::{
    fmt::{self, Display, Formatter},
    sync::OnceLock,
};

use tracing::info;

/// Size of the synthetic `0..N` benchmark input.
pub const DEFAULT_BENCH_SIZE: usize = 10_000;

/// Sum of the last two elements of the default input, so every solver hits its worst case.
pub const DEFAULT_BENCH_TARGET: i32 = 19_997;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bench_size: usize,
    pub bench_target: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bench_size: DEFAULT_BENCH_SIZE,
            bench_target: DEFAULT_BENCH_TARGET,
        }
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "bench_size={} bench_target={}", self.bench_size, self.bench_target)
    }
}

pub fn get() -> &'static Config {
    static CELL: OnceLock<Config> = OnceLock::new();

    CELL.get_or_init(|| {
        let config = Config::default();

        info!(config = %config, "initialized config");

        config
    })
}
