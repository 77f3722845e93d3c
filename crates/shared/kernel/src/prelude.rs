//! Commonly used kernel exports.

pub use crate::config::{ConfigError, load_config};
pub use crate::security::PasswordEncoder;
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};
pub use rollcall_domain::config::ApiConfig;
