//! Security primitives shared by slices.

mod password;

pub use password::{PasswordEncoder, PasswordError};
