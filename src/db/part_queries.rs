use sqlx::PgPool;

use crate::models::part::PartRecord;

/// List example parts for the selection UI.
pub async fn list_parts(pool: &PgPool, limit: i64) -> Result<Vec<PartRecord>, sqlx::Error> {
    sqlx::query_as::<_, PartRecord>(
        r#"
        SELECT part_number, product_category, brand, part_type,
               engine_application, material, fitment
        FROM parts
        ORDER BY part_number
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Look up a single part by part number.
pub async fn get_part(
    pool: &PgPool,
    part_number: &str,
) -> Result<Option<PartRecord>, sqlx::Error> {
    sqlx::query_as::<_, PartRecord>(
        r#"
        SELECT part_number, product_category, brand, part_type,
               engine_application, material, fitment
        FROM parts
        WHERE part_number = $1
        "#,
    )
    .bind(part_number)
    .fetch_optional(pool)
    .await
}
