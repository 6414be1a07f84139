//! Application state management.
//!
//! Holds the configuration and the one user store every router shares.

use domain_users::InMemoryUserRepository;

/// Shared application state.
///
/// Cloning is cheap: the repository is an `Arc` around the store.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    pub users: InMemoryUserRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let users = if config.seed_sample_data {
            InMemoryUserRepository::with_sample_data()
        } else {
            InMemoryUserRepository::new()
        };

        Self { config, users }
    }
}
