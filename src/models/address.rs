use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

/// Row shape returned by `GET /enderecos`: the address joined with the
/// owning user's name.
#[derive(Debug, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: i32,
    pub rua: String,
    pub cidade: String,
    pub estado: String,
    pub usuario_id: i32,
    pub nome_usuario: String,
}
