//! Facade crate for Rollcall features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register feature slices; extend as new slices appear.

use rollcall_database::Database;
pub use rollcall_domain as domain;
use rollcall_domain::config::ApiConfig;
pub use rollcall_kernel as kernel;

pub mod server {
    pub mod router {
        pub use rollcall_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use rollcall_users as users;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["users"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub async fn init(
    config: &ApiConfig,
    database: &Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Users
    slices.push(features::users::init(config, database).await?);

    Ok(slices)
}
