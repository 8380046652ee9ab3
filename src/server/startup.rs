use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    service::{administrator::AdministratorService, password::PasswordHasher},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration
/// (`sqlite://` or `postgres://`), then automatically runs all pending SeaORM migrations
/// to ensure the database schema is up-to-date. This function must complete successfully
/// before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures at least one `ADM` administrator exists.
///
/// Every management endpoint requires an `ADM` token, so an empty database would be
/// unusable. When no `ADM` exists, one is created from the configured bootstrap
/// credentials and a warning is logged so operators change the password.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Configuration holding the bootstrap email and password
/// - `passwords` - Password hasher used to store the bootstrap password
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    passwords: &PasswordHasher,
) -> Result<(), AppError> {
    let service = AdministratorService::new(db, passwords);

    match service
        .bootstrap(config.admin_email.clone(), config.admin_password.clone())
        .await?
    {
        Some(admin) => tracing::warn!(
            "No ADM administrator found, created {} (id {}). Change its password.",
            admin.email,
            admin.id
        ),
        None => tracing::debug!("ADM administrator present, skipping bootstrap"),
    }

    Ok(())
}
