use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Calculations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Calculations::CalculationId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Calculations::Expression).string().not_null())
                    .col(
                        ColumnDef::new(Calculations::RepresentativeResult)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Calculations::Count)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Calculations::LastUpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Calculations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Calculations {
    Table,
    CalculationId,
    Expression,
    RepresentativeResult,
    Count,
    LastUpdatedAt,
}
