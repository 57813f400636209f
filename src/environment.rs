use std::sync::Arc;

use log::Logger;

use crate::db::Db;

/// The largest number of recent complaints a single request may ask for.
pub const MAX_RECENT_LIMIT: u32 = 100;

/// Everything a request handler needs.
#[derive(Clone)]
pub struct Environment {
    pub logger: Arc<Logger>,
    pub db: Arc<dyn Db + Send + Sync>,
    pub config: Config,
}

impl Environment {
    pub fn new(logger: Arc<Logger>, db: Arc<dyn Db + Send + Sync>, config: Config) -> Self {
        Self { logger, db, config }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// How many complaints to list when no limit is requested.
    pub(crate) recent_limit: u32,
}

impl Config {
    pub fn new(recent_limit: u32) -> Self {
        Self {
            recent_limit: recent_limit.min(MAX_RECENT_LIMIT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(5)
    }
}
