use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Testimonials::Name).text().not_null())
                    .col(ColumnDef::new(Testimonials::Position).text().not_null())
                    .col(ColumnDef::new(Testimonials::Company).text().not_null())
                    .col(ColumnDef::new(Testimonials::Content).text().not_null())
                    .col(ColumnDef::new(Testimonials::AvatarUrl).text())
                    .col(ColumnDef::new(Testimonials::Rating).integer().not_null())
                    .col(
                        ColumnDef::new(Testimonials::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Testimonials::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The rating bounds live in validation too; the check keeps bad rows
        // out even when writes bypass the API.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE testimonials
                ADD CONSTRAINT chk_testimonials_rating CHECK (rating BETWEEN 1 AND 5);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_testimonials_featured
                ON testimonials (featured);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_testimonials_featured;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Position,
    Company,
    Content,
    AvatarUrl,
    Rating,
    Featured,
    OrderIndex,
    CreatedAt,
}
