use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Circles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Circles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Circles::Name).string_len(64).not_null())
                    .col(ColumnDef::new(Circles::SlugName).string_len(32).not_null())
                    .col(ColumnDef::new(Circles::ProfilePhoto).string_len(255).null())
                    .col(ColumnDef::new(Circles::CoverPhoto).string_len(255).null())
                    .col(ColumnDef::new(Circles::About).text().null())
                    .col(
                        ColumnDef::new(Circles::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Circles::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Circles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Circles::UpdatedAt)
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
                CREATE UNIQUE INDEX uq_circles_slug_name ON circles (slug_name);
                CREATE INDEX idx_circles_active_created ON circles (is_active, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_circles_updated_at
                BEFORE UPDATE ON circles
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_circles_updated_at ON circles")
            .await?;

        manager
            .drop_table(Table::drop().table(Circles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Circles {
    Table,
    Id,
    Name,
    SlugName,
    ProfilePhoto,
    CoverPhoto,
    About,
    IsVerified,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
