use sqlx::PgPool;

/// Ensures the `severity_level` enum and the `incidents` table exist.
///
/// Idempotent: the enum creation swallows `duplicate_object` and the
/// table uses `IF NOT EXISTS`, so this is safe to run on every boot.
pub async fn initialize(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DO $$ BEGIN
            CREATE TYPE severity_level AS ENUM ('Low', 'Medium', 'High');
        EXCEPTION
            WHEN duplicate_object THEN NULL;
        END $$;
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS incidents (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            severity severity_level NOT NULL,
            reported_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema initialized successfully");
    Ok(())
}
