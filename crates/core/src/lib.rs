pub mod config;
pub mod error;
pub mod logging;

pub use config::{BackendConfig, BackendMode, Config, DatabaseConfig, FileLoggingConfig, ProductsConfig};
pub use error::{Error, Result, SessionError};
pub use logging::{LogFormat, LoggingConfig, init_logging};
