use thiserror::Error;

/// Default port when PORT is not set
pub const DEFAULT_PORT: u16 = 7000;

/// Trait for providing environment variable access
///
/// Injecting the environment source keeps settings tests independent of the
/// global process environment, which parallel tests would otherwise race on.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production environment provider that reads from the system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("DATABASE_URL environment variable must be set")]
    MissingDatabaseUrl,

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Settings required to bring the service up
///
/// Loaded once in main.rs before anything else starts; everything after
/// startup receives these by value instead of re-reading the environment.
#[derive(Debug, Clone)]
pub struct BootstrapSettings {
    database_url: String,
    port: u16,
}

impl BootstrapSettings {
    /// Load settings from the given environment
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` when DATABASE_URL is absent or PORT is not a
    /// valid port number.
    pub fn load(env: &impl EnvironmentProvider) -> Result<Self, SettingsError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .ok_or(SettingsError::MissingDatabaseUrl)?;

        let port = match env.get_var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
pub struct MockEnvironment {
    vars: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn empty() -> Self {
        Self {
            vars: std::collections::HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
