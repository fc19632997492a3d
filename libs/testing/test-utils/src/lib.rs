//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! Add `features = ["mongo"]` to your dev-dependencies for container tests:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mongo"] }
//! ```
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!     let mongo = TestMongo::new(&builder.database_name()).await;
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same identifiers and names.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_list_products");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A 24-digit lowercase hex id, the textual form of a MongoDB ObjectId.
    ///
    /// `n` distinguishes several ids within one test.
    pub fn object_id_hex(&self, n: u32) -> String {
        format!("{:016x}{:08x}", self.seed, n)
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("vendor", "main"), "test-vendor-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Database name safe for MongoDB (at most 63 bytes, no dots).
    pub fn database_name(&self) -> String {
        format!("test_{:016x}", self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `id` looks like a hex-encoded ObjectId.
    pub fn assert_object_id_hex(id: &str, context: &str) {
        assert!(
            id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()),
            "{}: expected 24 hex digits, got {:?}",
            context,
            id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.object_id_hex(1), builder2.object_id_hex(1));
        assert_eq!(builder1.name("vendor", "a"), builder2.name("vendor", "a"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.object_id_hex(0), builder2.object_id_hex(0));
        assert_ne!(builder1.database_name(), builder2.database_name());
    }

    #[test]
    fn test_object_id_hex_shape() {
        let builder = TestDataBuilder::from_test_name("shape");
        assertions::assert_object_id_hex(&builder.object_id_hex(3), "object id");
        assert_ne!(builder.object_id_hex(1), builder.object_id_hex(2));
    }
}
