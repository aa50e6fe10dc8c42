//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongodb")
//! - `TestDataBuilder`: deterministic test data generation
//! - `assertions`: custom assertion helpers
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!     let db = mongo.database(&builder.database_name());
//!     let title = builder.name("event", "launch");
//! }
//! ```

#[cfg(feature = "mongodb")]
mod mongodb;

#[cfg(feature = "mongodb")]
pub use crate::mongodb::TestMongo;

/// Builder for test data seeded from the test name
///
/// Tests that share a container stay isolated by using distinct names.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_event");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Database name unique to this seed
    pub fn database_name(&self) -> String {
        format!("test_{:x}", self.seed)
    }

    /// Unique human-readable value, e.g. `test-event-12345-launch`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some and return it
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a string is a 24 character hexadecimal identifier
    pub fn assert_hex_id(value: &str, context: &str) {
        assert!(
            value.len() == 24 && value.chars().all(|c| c.is_ascii_hexdigit()),
            "{}: expected 24 hex characters, got {:?}",
            context,
            value
        );
    }
}
