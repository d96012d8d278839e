use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

/// Row shape returned by `GET /users`. `senha` is never selected, so it can
/// never leak into a response.
#[derive(Debug, FromRow, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub criado_em: chrono::DateTime<chrono::Utc>,
}
