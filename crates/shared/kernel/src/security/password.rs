/// Errors produced while hashing or verifying passwords.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("password hashing error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Stateless bcrypt wrapper carrying the configured work factor.
///
/// Verification reads the cost from the stored hash, so hashes created with a
/// different cost remain verifiable after the configuration changes.
#[derive(Debug, Clone, Copy)]
pub struct PasswordEncoder {
    cost: u32,
}

impl PasswordEncoder {
    /// Creates an encoder with the given bcrypt cost (valid range 4..=31).
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password.
    ///
    /// # Errors
    /// Returns [`PasswordError::Bcrypt`] when the cost is out of range.
    pub fn hash(&self, plain: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::hash(plain, self.cost)?)
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// # Errors
    /// Returns [`PasswordError::Bcrypt`] when the stored hash is malformed.
    pub fn verify(&self, plain: &str, hash: &str) -> Result<bool, PasswordError> {
        Ok(bcrypt::verify(plain, hash)?)
    }
}

impl Default for PasswordEncoder {
    fn default() -> Self {
        Self { cost: bcrypt::DEFAULT_COST }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps the tests fast; production cost comes from config.
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify_round_trips() {
        let encoder = PasswordEncoder::new(TEST_COST);
        let hash = encoder.hash("hunter2").expect("hash");

        assert_ne!(hash, "hunter2");
        assert!(encoder.verify("hunter2", &hash).expect("verify"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let encoder = PasswordEncoder::new(TEST_COST);
        let hash = encoder.hash("hunter2").expect("hash");

        assert!(!encoder.verify("hunter3", &hash).expect("verify"));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let encoder = PasswordEncoder::new(TEST_COST);
        assert!(encoder.verify("hunter2", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn out_of_range_cost_fails() {
        let encoder = PasswordEncoder::new(99);
        assert!(encoder.hash("hunter2").is_err());
    }
}
