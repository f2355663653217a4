use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create trees table
        manager
            .create_table(
                Table::create()
                    .table(Trees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trees::OwnerId).integer().not_null())
                    .col(ColumnDef::new(Trees::Species).string().not_null())
                    .col(ColumnDef::new(Trees::Latitude).double().not_null())
                    .col(ColumnDef::new(Trees::Longitude).double().not_null())
                    .col(ColumnDef::new(Trees::LocationName).string().null())
                    .col(ColumnDef::new(Trees::Nickname).string().null())
                    .col(ColumnDef::new(Trees::Description).text().null())
                    .col(
                        ColumnDef::new(Trees::HealthScore)
                            .double()
                            .not_null()
                            .default(100.0),
                    )
                    .col(
                        ColumnDef::new(Trees::CurrentValue)
                            .double()
                            .not_null()
                            .default(100.0),
                    )
                    .col(
                        ColumnDef::new(Trees::IsPublic)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Trees::PlantingDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Trees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Trees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create index on owner_id for owner-scoped listings
        manager
            .create_index(
                Index::create()
                    .name("idx_trees_owner_id")
                    .table(Trees::Table)
                    .col(Trees::OwnerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Unique backstop for the per-owner nickname namespace. The create path
        // still checks inside its transaction so the duplicate error is
        // deterministic; NULL nicknames are exempt.
        manager
            .create_index(
                Index::create()
                    .name("idx_trees_owner_nickname")
                    .table(Trees::Table)
                    .col(Trees::OwnerId)
                    .col(Trees::Nickname)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create health_history table (append-only)
        manager
            .create_table(
                Table::create()
                    .table(HealthHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HealthHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HealthHistory::TreeId).integer().not_null())
                    .col(
                        ColumnDef::new(HealthHistory::HealthScore)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HealthHistory::TokenValue)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HealthHistory::EventType).string().null())
                    .col(ColumnDef::new(HealthHistory::Description).text().null())
                    .col(
                        ColumnDef::new(HealthHistory::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_health_history_tree_id")
                            .from(HealthHistory::Table, HealthHistory::TreeId)
                            .to(Trees::Table, Trees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_health_history_tree_id")
                    .table(HealthHistory::Table)
                    .col(HealthHistory::TreeId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_health_history_recorded_at")
                    .table(HealthHistory::Table)
                    .col(HealthHistory::RecordedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create tokens table
        manager
            .create_table(
                Table::create()
                    .table(Tokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tokens::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tokens::TokenId).string().not_null())
                    .col(ColumnDef::new(Tokens::TreeId).integer().not_null())
                    .col(ColumnDef::new(Tokens::OwnerId).integer().not_null())
                    .col(ColumnDef::new(Tokens::ImageUri).string().not_null())
                    .col(ColumnDef::new(Tokens::MetadataUri).string().not_null())
                    .col(
                        ColumnDef::new(Tokens::BaseValue)
                            .double()
                            .not_null()
                            .default(100.0),
                    )
                    .col(
                        ColumnDef::new(Tokens::CurrentValue)
                            .double()
                            .not_null()
                            .default(100.0),
                    )
                    .col(
                        ColumnDef::new(Tokens::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Tokens::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tokens_tree_id")
                            .from(Tokens::Table, Tokens::TreeId)
                            .to(Trees::Table, Trees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Global uniqueness of the token identifier
        manager
            .create_index(
                Index::create()
                    .name("idx_tokens_token_id")
                    .table(Tokens::Table)
                    .col(Tokens::TokenId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // At most one token per tree; concurrent mints race on this index
        manager
            .create_index(
                Index::create()
                    .name("idx_tokens_tree_id")
                    .table(Tokens::Table)
                    .col(Tokens::TreeId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tokens_owner_id")
                    .table(Tokens::Table)
                    .col(Tokens::OwnerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create trades table (append-only)
        manager
            .create_table(
                Table::create()
                    .table(Trades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trades::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trades::TokenId).integer().not_null())
                    .col(ColumnDef::new(Trades::UserId).integer().not_null())
                    .col(ColumnDef::new(Trades::Side).string().not_null())
                    .col(ColumnDef::new(Trades::Quantity).double().not_null())
                    .col(ColumnDef::new(Trades::PricePerUnit).double().not_null())
                    .col(ColumnDef::new(Trades::TotalValue).double().not_null())
                    .col(
                        ColumnDef::new(Trades::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trades_token_id")
                            .from(Trades::Table, Trades::TokenId)
                            .to(Tokens::Table, Tokens::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trades_token_id")
                    .table(Trades::Table)
                    .col(Trades::TokenId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trades_created_at")
                    .table(Trades::Table)
                    .col(Trades::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(Trades::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tokens::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(HealthHistory::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Trees::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Trees {
    Table,
    Id,
    OwnerId,
    Species,
    Latitude,
    Longitude,
    LocationName,
    Nickname,
    Description,
    HealthScore,
    CurrentValue,
    IsPublic,
    PlantingDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum HealthHistory {
    Table,
    Id,
    TreeId,
    HealthScore,
    TokenValue,
    EventType,
    Description,
    RecordedAt,
}

#[derive(DeriveIden)]
enum Tokens {
    Table,
    Id,
    TokenId,
    TreeId,
    OwnerId,
    ImageUri,
    MetadataUri,
    BaseValue,
    CurrentValue,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Trades {
    Table,
    Id,
    TokenId,
    UserId,
    Side,
    Quantity,
    PricePerUnit,
    TotalValue,
    CreatedAt,
}
