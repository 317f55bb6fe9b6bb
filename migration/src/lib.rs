pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_table;
mod m20250101_000002_create_followings_table;
mod m20250101_000003_create_circles_table;
mod m20250101_000004_create_subscriptions_table;
mod m20250101_000005_create_breeds_table;
mod m20250101_000006_create_posts_table;
mod m20250101_000007_create_comments_table;
mod m20250101_000008_seed_breeds;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_followings_table::Migration),
            Box::new(m20250101_000003_create_circles_table::Migration),
            Box::new(m20250101_000004_create_subscriptions_table::Migration),
            Box::new(m20250101_000005_create_breeds_table::Migration),
            Box::new(m20250101_000006_create_posts_table::Migration),
            Box::new(m20250101_000007_create_comments_table::Migration),
            Box::new(m20250101_000008_seed_breeds::Migration),
        ]
    }
}
