use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required field")]
    Validation,

    #[error("Failed to create table `{0}`")]
    TableCreation(&'static str),

    #[error("Database error")]
    Database,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Query-level detail is logged where the error is mapped; clients
        // only ever see these fixed messages.
        let (status, erro) = match self {
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                "Todos os campos são obrigatórios.".to_string(),
            ),
            ApiError::TableCreation(table) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Erro ao criar tabela {table}"),
            ),
            ApiError::Database => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao acessar o banco de dados".to_string(),
            ),
        };

        let body = Json(json!({
            "erro": erro,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = ApiError::Validation.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_maps_to_internal_server_error() {
        let response = ApiError::Database.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn table_creation_maps_to_internal_server_error() {
        let response = ApiError::TableCreation("usuarios").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
