use sea_orm_migration::{prelude::*, schema::*};

/// Columns shared by every audited table.
#[derive(DeriveIden)]
pub enum Audit {
    Id,
    CreatedAt,
    CreatedBy,
    UpdatedAt,
    UpdatedBy,
}

/// Adds the primary key and audit columns to `table`.
///
/// `created_by` / `updated_by` are plain user ids without a foreign key: the
/// user table itself depends on address and state, so a constraint here would
/// make the schema cyclic.
pub fn columns(table: &mut TableCreateStatement, created_by: bool) -> &mut TableCreateStatement {
    table
        .col(uuid(Audit::Id).primary_key())
        .col(
            timestamp_with_time_zone(Audit::CreatedAt)
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            timestamp_with_time_zone(Audit::UpdatedAt)
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(uuid_null(Audit::UpdatedBy));

    if created_by {
        table.col(uuid_null(Audit::CreatedBy));
    }

    table
}

/// Index backing the default `created_at` lookups.
pub fn created_at_index<T>(table: T, name: &str) -> IndexCreateStatement
where
    T: IntoIden + 'static,
{
    Index::create()
        .name(name)
        .table(table)
        .col(Audit::CreatedAt)
        .if_not_exists()
        .to_owned()
}

/// CHECK expression restricting a small integer column to its declared codes.
pub fn one_of<T>(col: T, codes: &[i16]) -> SimpleExpr
where
    T: IntoIden + 'static,
{
    Expr::col(col).is_in(codes.iter().copied())
}
