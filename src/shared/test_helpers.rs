#[cfg(test)]
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

#[cfg(test)]
use sqlx::PgPool;

/// Pool that never opens a connection.
///
/// Requests that fail validation must not reach storage, so tests
/// built on this pool double as proof that no query was executed.
#[cfg(test)]
pub fn lazy_test_pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy_with(PgConnectOptions::new())
}
