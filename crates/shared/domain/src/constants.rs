//! String constants shared across slices and the OpenAPI surface.

/// OpenAPI tag for operational endpoints.
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for the user roster endpoints.
pub const USERS_TAG: &str = "Users";
