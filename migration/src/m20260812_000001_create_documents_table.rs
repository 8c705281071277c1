use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create documents table
        //
        // One row per document, keyed by (collection, doc_id).
        // The payload is schemaless JSONB; typing happens at the
        // application's store boundary.
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Documents::Collection)
                            .string_len(40)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Documents::DocId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Documents::Data).json_binary().not_null())
                    .col(
                        ColumnDef::new(Documents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(Documents::Collection)
                            .col(Documents::DocId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_documents_collection")
                    .table(Documents::Table)
                    .col(Documents::Collection)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Documents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Documents {
    Table,
    Collection,
    DocId,
    Data,
    UpdatedAt,
}
