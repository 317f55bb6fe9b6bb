use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::BreedId).uuid().not_null())
                    .col(ColumnDef::new(Posts::UserId).uuid().not_null())
                    .col(ColumnDef::new(Posts::CircleId).uuid().null())
                    .col(ColumnDef::new(Posts::Name).string_len(32).null())
                    .col(ColumnDef::new(Posts::Information).text().not_null())
                    .col(ColumnDef::new(Posts::Tag).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Posts::State)
                            .string_len(16)
                            .not_null()
                            .default("open"),
                    )
                    .col(ColumnDef::new(Posts::ColorPrimary).string_len(8).not_null())
                    .col(ColumnDef::new(Posts::ColorSecondary).string_len(8).null())
                    .col(ColumnDef::new(Posts::Size).string_len(1).not_null())
                    .col(ColumnDef::new(Posts::PhotoFirst).string_len(255).not_null())
                    .col(ColumnDef::new(Posts::PhotoSecond).string_len(255).null())
                    .col(ColumnDef::new(Posts::PhotoThird).string_len(255).null())
                    .col(
                        ColumnDef::new(Posts::Latitude)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Posts::Longitude)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Posts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Breeds stay while any post references them
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_breed_id")
                            .from(Posts::Table, Posts::BreedId)
                            .to(Breeds::Table, Breeds::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_user_id")
                            .from(Posts::Table, Posts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_circle_id")
                            .from(Posts::Table, Posts::CircleId)
                            .to(Circles::Table, Circles::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE posts
                ADD CONSTRAINT ck_posts_tag CHECK (tag IN ('lost', 'found', 'adoption')),
                ADD CONSTRAINT ck_posts_state CHECK (state IN ('open', 'finished', 'cancelled')),
                ADD CONSTRAINT ck_posts_size CHECK (size IN ('s', 'm', 'b'));
                CREATE INDEX idx_posts_user_created ON posts (user_id, created_at DESC);
                CREATE INDEX idx_posts_circle_created ON posts (circle_id, created_at DESC);
                CREATE INDEX idx_posts_created_at ON posts (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_posts_updated_at
                BEFORE UPDATE ON posts
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_posts_updated_at ON posts")
            .await?;

        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    BreedId,
    UserId,
    CircleId,
    Name,
    Information,
    Tag,
    State,
    ColorPrimary,
    ColorSecondary,
    Size,
    PhotoFirst,
    PhotoSecond,
    PhotoThird,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Breeds {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Circles {
    Table,
    Id,
}
