pub use sea_orm_migration::prelude::*;

use sea_orm_migration::sea_orm::DatabaseBackend;

mod m20250901_000001_create_core_tables;
mod m20250901_000002_create_freshness_tables;
mod m20250901_000003_create_engagement_tables;
mod m20250901_000004_seed_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_core_tables::Migration),
            Box::new(m20250901_000002_create_freshness_tables::Migration),
            Box::new(m20250901_000003_create_engagement_tables::Migration),
            Box::new(m20250901_000004_seed_catalog::Migration),
        ]
    }
}

/// Auto-increment primary key column.
///
/// SQLite only allows AUTOINCREMENT on an `INTEGER PRIMARY KEY`, everything
/// else gets a BIGINT identity.
pub(crate) fn pk_column<T: IntoIden>(manager: &SchemaManager, col: T) -> ColumnDef {
    let mut def = ColumnDef::new(col);
    match manager.get_database_backend() {
        DatabaseBackend::Sqlite => def.integer(),
        _ => def.big_integer(),
    };
    def.not_null().auto_increment().primary_key();
    def
}
