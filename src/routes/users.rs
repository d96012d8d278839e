use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;
use utoipa::ToSchema;

use crate::{errors::ApiError, models::user::User, startup::AppState};

/// Shared by create and update; both require every field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

impl UserPayload {
    fn into_fields(self) -> Result<(String, String, String), ApiError> {
        match (self.nome, self.email, self.senha) {
            (Some(nome), Some(email), Some(senha))
                if !nome.is_empty() && !email.is_empty() && !senha.is_empty() =>
            {
                Ok((nome, email, senha))
            }
            _ => Err(ApiError::Validation),
        }
    }
}

/// `senha` is intentionally absent.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedUser {
    pub id: u64,
    pub nome: String,
    pub email: String,
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "usuarios",
    request_body = UserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = CreatedUser),
        (status = 400, description = "Campos obrigatórios ausentes"),
        (status = 500, description = "Erro no banco de dados")
    )
)]
#[instrument(name = "HTTP: Create user", skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let (nome, email, senha) = payload.into_fields()?;
    let id = state.user_service.create(&nome, &email, &senha).await?;
    Ok((StatusCode::CREATED, Json(CreatedUser { id, nome, email })))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "usuarios",
    responses(
        (status = 200, description = "Lista de usuários", body = [User]),
        (status = 500, description = "Erro no banco de dados")
    )
)]
#[instrument(name = "HTTP: List users", skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "usuarios",
    params(("id" = i32, Path, description = "Identificador do usuário")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Usuário atualizado"),
        (status = 400, description = "Campos obrigatórios ausentes"),
        (status = 500, description = "Erro no banco de dados")
    )
)]
#[instrument(name = "HTTP: Update user", skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let (nome, email, senha) = payload.into_fields()?;
    state.user_service.update(id, &nome, &email, &senha).await?;
    Ok(Json(json!({ "mensagem": "Usuário atualizado com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "usuarios",
    params(("id" = i32, Path, description = "Identificador do usuário")),
    responses(
        (status = 200, description = "Usuário deletado"),
        (status = 500, description = "Erro no banco de dados")
    )
)]
#[instrument(name = "HTTP: Delete user", skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state.user_service.delete(id).await?;
    Ok(Json(json!({ "mensagem": "Usuário deletado com sucesso" })))
}

#[cfg(test)]
mod tests {
    use super::UserPayload;

    fn payload(nome: Option<&str>, email: Option<&str>, senha: Option<&str>) -> UserPayload {
        UserPayload {
            nome: nome.map(String::from),
            email: email.map(String::from),
            senha: senha.map(String::from),
        }
    }

    #[test]
    fn complete_payload_passes_through() {
        let (nome, email, senha) = payload(Some("Ana"), Some("ana@x.com"), Some("p"))
            .into_fields()
            .unwrap();
        assert_eq!(nome, "Ana");
        assert_eq!(email, "ana@x.com");
        assert_eq!(senha, "p");
    }

    #[test]
    fn missing_field_is_rejected() {
        assert!(payload(Some("Ana"), Some("ana@x.com"), None)
            .into_fields()
            .is_err());
        assert!(payload(None, None, None).into_fields().is_err());
    }

    #[test]
    fn empty_field_is_rejected() {
        assert!(payload(Some("Ana"), Some(""), Some("p"))
            .into_fields()
            .is_err());
    }
}
