use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::instrument;

use crate::{errors::ApiError, startup::AppState};

/// `usuarios` first; if it fails the `enderecos` statement is never issued.
#[utoipa::path(
    post,
    path = "/criar-tabelas",
    tag = "tabelas",
    responses(
        (status = 201, description = "Tabelas criadas"),
        (status = 500, description = "Erro ao criar uma das tabelas")
    )
)]
#[instrument(name = "HTTP: Create tables", skip(state))]
pub async fn create_tables(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.schema.create_usuarios().await.map_err(|e| {
        tracing::error!("Failed to create usuarios table: {:?}", e);
        ApiError::TableCreation("usuarios")
    })?;
    state.schema.create_enderecos().await.map_err(|e| {
        tracing::error!("Failed to create enderecos table: {:?}", e);
        ApiError::TableCreation("enderecos")
    })?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "mensagem": "Tabelas criadas com sucesso!" })),
    ))
}
