use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Breeds::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Breeds::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Breeds::Animal).string_len(8).not_null())
                    .col(ColumnDef::new(Breeds::Name).string_len(32).null())
                    .col(ColumnDef::new(Breeds::Description).text().null())
                    .col(ColumnDef::new(Breeds::Photo).string_len(255).null())
                    .col(
                        ColumnDef::new(Breeds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Breeds::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE breeds
                ADD CONSTRAINT ck_breeds_animal CHECK (animal IN ('dog', 'cat', 'other'));
                CREATE UNIQUE INDEX uq_breeds_animal_name ON breeds (animal, name);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_breeds_updated_at
                BEFORE UPDATE ON breeds
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_breeds_updated_at ON breeds")
            .await?;

        manager
            .drop_table(Table::drop().table(Breeds::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Breeds {
    Table,
    Id,
    Animal,
    Name,
    Description,
    Photo,
    CreatedAt,
    UpdatedAt,
}
