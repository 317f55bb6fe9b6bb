use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Followings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Followings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Followings::FollowerId).uuid().not_null())
                    .col(ColumnDef::new(Followings::FollowedId).uuid().not_null())
                    .col(
                        ColumnDef::new(Followings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Followings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_followings_follower_id")
                            .from(Followings::Table, Followings::FollowerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_followings_followed_id")
                            .from(Followings::Table, Followings::FollowedId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One edge per ordered pair. Concurrent duplicate inserts race on
        // this index, not on an application-side lookup.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX uq_followings_follower_followed
                ON followings (follower_id, followed_id);
                CREATE INDEX idx_followings_followed_id ON followings (followed_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_followings_updated_at
                BEFORE UPDATE ON followings
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
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_followings_updated_at ON followings",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Followings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Followings {
    Table,
    Id,
    FollowerId,
    FollowedId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
