use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CodeRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CodeRecords::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CodeRecords::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CodeRecords::PartType).string().not_null())
                    .col(ColumnDef::new(CodeRecords::ManufactureDate).date().not_null())
                    .col(ColumnDef::new(CodeRecords::LotNo).string().not_null())
                    .col(ColumnDef::new(CodeRecords::SerialNo).big_integer().not_null())
                    .col(
                        ColumnDef::new(CodeRecords::ManufacturerName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CodeRecords::WarrantyYears).integer().not_null())
                    .col(ColumnDef::new(CodeRecords::ExpiryDate).date().not_null())
                    .col(ColumnDef::new(CodeRecords::Url).text().not_null())
                    .col(ColumnDef::new(CodeRecords::BatchId).string().not_null())
                    .col(
                        ColumnDef::new(CodeRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_code_records_batch_id")
                    .table(CodeRecords::Table)
                    .col(CodeRecords::BatchId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CodeRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CodeRecords {
    Table,
    Id,
    Code,
    PartType,
    ManufactureDate,
    LotNo,
    SerialNo,
    ManufacturerName,
    WarrantyYears,
    ExpiryDate,
    Url,
    BatchId,
    CreatedAt,
}
