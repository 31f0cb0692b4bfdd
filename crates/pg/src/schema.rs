use tokio_postgres::Client;

/// Schema metadata for PostgreSQL tables.
///
/// Provides compile-time SQL for table creation and indexing. All methods
/// return `&'static str` so that implementors can build them with
/// `const_format::concatcp!` from the table name constants.
///
/// Every statement must be idempotent (`IF NOT EXISTS`): [`create`] runs
/// them on each startup.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements beyond those implied
    /// by primary and unique keys.
    fn indices() -> &'static str {
        ""
    }
}

/// Creates the table and its indices if they are missing.
pub async fn create<S: Schema>(client: &Client) -> Result<(), tokio_postgres::Error> {
    log::info!("creating table ({})", S::name());
    client.batch_execute(S::creates()).await?;
    if !S::indices().is_empty() {
        log::info!("indexing table ({})", S::name());
        client.batch_execute(S::indices()).await?;
    }
    Ok(())
}
