use crate::error::{DatabaseError, DatabaseErrorExt};
use chrono::Utc;
use fxhash::FxHashMap;
use sqlx::sqlite::SqlitePool;

const BOOTSTRAP: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version    TEXT PRIMARY KEY,
    name       TEXT NOT NULL,
    checksum   TEXT NOT NULL,
    applied_at TEXT NOT NULL
)";

#[derive(Debug)]
pub(crate) struct Migration {
    pub version: &'static str,
    pub name: &'static str,
    pub script: &'static str,
}

impl Migration {
    #[must_use]
    pub(crate) const fn new(version: &'static str, name: &'static str, script: &'static str) -> Self {
        Self { version, name, script }
    }

    fn checksum(&self) -> String {
        format!("{:016x}", fxhash::hash64(self.script))
    }

    fn to_applied(&self) -> AppliedMigration {
        AppliedMigration {
            version: self.version.to_owned(),
            name: self.name.to_owned(),
            checksum: self.checksum(),
        }
    }
}

/// Ordered list of every schema change shipped with this crate.
pub(crate) fn builtin_migrations() -> [Migration; 3] {
    [
        Migration::new(
            "0001",
            "create_warehouses",
            include_str!("../migrations/0001_create_warehouses.sql"),
        ),
        Migration::new("0002", "create_vehicles", include_str!("../migrations/0002_create_vehicles.sql")),
        Migration::new(
            "0003",
            "create_shipments",
            include_str!("../migrations/0003_create_shipments.sql"),
        ),
    ]
}

#[derive(Debug, Default)]
pub(crate) struct MigrationReport {
    pub applied: Vec<AppliedMigration>,
    pub skipped: Vec<AppliedMigration>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AppliedMigration {
    pub version: String,
    pub name: String,
    pub checksum: String,
}

#[derive(Debug)]
pub(crate) struct MigrationRunner {
    pool: SqlitePool,
}

impl MigrationRunner {
    #[must_use]
    pub(crate) const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) async fn run(&self) -> Result<MigrationReport, DatabaseError> {
        sqlx::query(BOOTSTRAP)
            .execute(&self.pool)
            .await
            .context("Creating schema_migrations table")?;

        let mut report = MigrationReport::default();
        let applied_migrations = self.get_migrations_map().await?;

        for migration in builtin_migrations() {
            if let Some(applied) = applied_migrations.get(migration.version) {
                ensure_checksum_match(&migration, &applied.checksum)?;
                report.skipped.push(migration.to_applied());
                continue;
            }

            self.apply_migration(&migration).await?;
            report.applied.push(migration.to_applied());
        }

        Ok(report)
    }

    async fn apply_migration(&self, migration: &Migration) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await.context("Starting migration transaction")?;

        sqlx::raw_sql(migration.script)
            .execute(&mut *tx)
            .await
            .context(format!("SQL execution failed at {}:{}", migration.version, migration.name))?;

        sqlx::query(
            "INSERT INTO schema_migrations (version, name, checksum, applied_at) VALUES (?, ?, ?, ?)",
        )
        .bind(migration.version)
        .bind(migration.name)
        .bind(migration.checksum())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .context("Recording applied migration")?;

        tx.commit().await.context("Committing migration")?;
        Ok(())
    }

    async fn get_migrations_map(&self) -> Result<FxHashMap<String, AppliedMigration>, DatabaseError> {
        let entries = sqlx::query_as::<_, AppliedMigration>(
            "SELECT version, name, checksum FROM schema_migrations ORDER BY version",
        )
        .fetch_all(&self.pool)
        .await
        .context("Loading applied migrations")?;

        Ok(entries.into_iter().map(|entry| (entry.version.clone(), entry)).collect())
    }
}

fn ensure_checksum_match(migration: &Migration, existing: &str) -> Result<(), DatabaseError> {
    let expected = migration.checksum();
    if existing != expected {
        return Err(DatabaseError::Migration {
            message: format!(
                "Checksum mismatch for {}:{} (recorded {existing}, shipped {expected})",
                migration.version, migration.name
            )
            .into(),
            context: Some("Migration already applied with different contents".into()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_strictly_ordered() {
        let migrations = builtin_migrations();
        assert!(migrations.windows(2).all(|pair| pair[0].version < pair[1].version));
    }

    #[test]
    fn checksum_detects_drift() {
        let migration = Migration::new("0001", "x", "CREATE TABLE t (id INTEGER)");
        assert!(ensure_checksum_match(&migration, &migration.checksum()).is_ok());
        assert!(matches!(
            ensure_checksum_match(&migration, "deadbeef"),
            Err(DatabaseError::Migration { .. })
        ));
    }
}
