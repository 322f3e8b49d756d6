// Config layer - bootstrap settings, database and logging setup
pub mod database;
pub mod logging;
pub mod settings;

pub use logging::init_logging;
pub use settings::{BootstrapSettings, EnvironmentProvider, SettingsError, SystemEnvironment};
