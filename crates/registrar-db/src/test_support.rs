//! Shared test utilities for registrar-db tests.

pub(crate) mod helpers {
    use crate::RegistrarDb;

    /// Create an in-memory database for testing.
    pub async fn test_db() -> RegistrarDb {
        RegistrarDb::open_local(":memory:").await.unwrap()
    }
}
