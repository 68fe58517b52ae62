use anyhow::{Context, Result};

use super::connection::DbConn;

/// Applies the embedded schema, dropping and recreating every table and
/// view. There are no migrations; init is a full reset.
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    conn.execute_batch(schema_sql)
        .context("Failed to apply database schema")?;

    log::info!("Database schema reset successfully");
    Ok(())
}
