/// Embedded schema migrations
///
/// SQL files live in `shiftorl-shared/migrations/` and are compiled into
/// the binary with `sqlx::migrate!`. They create the three tables the site
/// touches: `client_inquiries`, `email_subscriptions` and `blog_posts`.

use sqlx::postgres::PgPool;
use tracing::{info, warn};

/// Applies every pending migration
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations");

    match sqlx::migrate!("./migrations").run(pool).await {
        Ok(()) => {
            info!("Database schema is up to date");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Migration failed");
            Err(e)
        }
    }
}
