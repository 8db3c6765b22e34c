// Application state shared with every handler

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;

// There are no services behind this server, so the state is just the
// resolved environment configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Arc<EnvironmentVariables>,
}

impl AppState {
    pub fn from_env() -> anyhow::Result<Self> {
        let env: EnvironmentVariables = EnvironmentVariables::load()?;
        Ok(Self { env: Arc::new(env) })
    }
}
