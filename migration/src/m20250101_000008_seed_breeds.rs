use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reference taxonomy. The "unknown" rows (NULL name) let posts
        // describe mixed or unidentified animals.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO breeds (id, animal, name, description) VALUES
                    (gen_random_uuid(), 'dog', NULL, 'Mixed or unknown breed'),
                    (gen_random_uuid(), 'dog', 'Labrador Retriever', NULL),
                    (gen_random_uuid(), 'dog', 'German Shepherd', NULL),
                    (gen_random_uuid(), 'dog', 'Golden Retriever', NULL),
                    (gen_random_uuid(), 'dog', 'Poodle', NULL),
                    (gen_random_uuid(), 'dog', 'Beagle', NULL),
                    (gen_random_uuid(), 'dog', 'Bulldog', NULL),
                    (gen_random_uuid(), 'dog', 'Chihuahua', NULL),
                    (gen_random_uuid(), 'dog', 'Schnauzer', NULL),
                    (gen_random_uuid(), 'cat', NULL, 'Mixed or unknown breed'),
                    (gen_random_uuid(), 'cat', 'Siamese', NULL),
                    (gen_random_uuid(), 'cat', 'Persian', NULL),
                    (gen_random_uuid(), 'cat', 'Maine Coon', NULL),
                    (gen_random_uuid(), 'cat', 'Bengal', NULL),
                    (gen_random_uuid(), 'other', NULL, 'Any other animal')
                ON CONFLICT DO NOTHING;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM breeds")
            .await?;

        Ok(())
    }
}
