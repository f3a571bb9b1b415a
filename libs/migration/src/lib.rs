pub use sea_orm_migration::prelude::*;

mod m20250221_000000_bootstrap;
mod m20250221_000001_create_categories;
mod m20250221_000002_create_tasks;
mod m20250221_000003_seed_data;

/// Number of leading migrations that build the schema; the rest insert data.
///
/// `Migrator::up(db, Some(SCHEMA_MIGRATIONS))` yields an empty database.
pub const SCHEMA_MIGRATIONS: u32 = 3;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250221_000000_bootstrap::Migration),
            Box::new(m20250221_000001_create_categories::Migration),
            Box::new(m20250221_000002_create_tasks::Migration),
            Box::new(m20250221_000003_seed_data::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_migrations_precede_seed() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(names.len(), SCHEMA_MIGRATIONS as usize + 1);
        assert!(names[SCHEMA_MIGRATIONS as usize].ends_with("seed_data"));
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
