use sqlx::PgPool;

use crate::error::AppError;

/// Projects the player ids out of the roster. The roster itself is owned by
/// the club staff; an empty result is valid and means "no data available".
pub async fn fetch_player_ids(db: &PgPool) -> Result<Vec<String>, AppError> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT player_id
        FROM roster
        ORDER BY player_id
        "#,
    )
    .fetch_all(db)
    .await
    .map_err(AppError::DataUnavailable)
}
