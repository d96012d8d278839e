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

use crate::{errors::ApiError, models::address::Address, startup::AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAddressPayload {
    pub rua: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub usuario_id: Option<i32>,
}

impl CreateAddressPayload {
    fn into_fields(self) -> Result<(String, String, String, i32), ApiError> {
        match (self.rua, self.cidade, self.estado, self.usuario_id) {
            (Some(rua), Some(cidade), Some(estado), Some(usuario_id))
                if !rua.is_empty() && !cidade.is_empty() && !estado.is_empty() =>
            {
                Ok((rua, cidade, estado, usuario_id))
            }
            _ => Err(ApiError::Validation),
        }
    }
}

/// The owner cannot be moved on update, so `usuario_id` is not accepted.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAddressPayload {
    pub rua: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
}

impl UpdateAddressPayload {
    fn into_fields(self) -> Result<(String, String, String), ApiError> {
        match (self.rua, self.cidade, self.estado) {
            (Some(rua), Some(cidade), Some(estado))
                if !rua.is_empty() && !cidade.is_empty() && !estado.is_empty() =>
            {
                Ok((rua, cidade, estado))
            }
            _ => Err(ApiError::Validation),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedAddress {
    pub id: u64,
    pub rua: String,
    pub cidade: String,
    pub estado: String,
    pub usuario_id: i32,
}

#[utoipa::path(
    post,
    path = "/enderecos",
    tag = "enderecos",
    request_body = CreateAddressPayload,
    responses(
        (status = 201, description = "Endereço criado", body = CreatedAddress),
        (status = 400, description = "Campos obrigatórios ausentes"),
        (status = 500, description = "Erro no banco de dados ou usuário inexistente")
    )
)]
#[instrument(name = "HTTP: Create address", skip(state, payload))]
pub async fn create_address(
    State(state): State<AppState>,
    Json(payload): Json<CreateAddressPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let (rua, cidade, estado, usuario_id) = payload.into_fields()?;
    let id = state
        .address_service
        .create(&rua, &cidade, &estado, usuario_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedAddress {
            id,
            rua,
            cidade,
            estado,
            usuario_id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/enderecos",
    tag = "enderecos",
    responses(
        (status = 200, description = "Lista de endereços com o nome do dono", body = [Address]),
        (status = 500, description = "Erro no banco de dados")
    )
)]
#[instrument(name = "HTTP: List addresses", skip(state))]
pub async fn list_addresses(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let addresses = state.address_service.list().await?;
    Ok(Json(addresses))
}

#[utoipa::path(
    put,
    path = "/enderecos/{id}",
    tag = "enderecos",
    params(("id" = i32, Path, description = "Identificador do endereço")),
    request_body = UpdateAddressPayload,
    responses(
        (status = 200, description = "Endereço atualizado"),
        (status = 400, description = "Campos obrigatórios ausentes"),
        (status = 500, description = "Erro no banco de dados")
    )
)]
#[instrument(name = "HTTP: Update address", skip(state, payload))]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAddressPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let (rua, cidade, estado) = payload.into_fields()?;
    state
        .address_service
        .update(id, &rua, &cidade, &estado)
        .await?;
    Ok(Json(json!({ "mensagem": "Endereço atualizado com sucesso" })))
}

#[utoipa::path(
    delete,
    path = "/enderecos/{id}",
    tag = "enderecos",
    params(("id" = i32, Path, description = "Identificador do endereço")),
    responses(
        (status = 200, description = "Endereço deletado"),
        (status = 500, description = "Erro no banco de dados")
    )
)]
#[instrument(name = "HTTP: Delete address", skip(state))]
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    state.address_service.delete(id).await?;
    Ok(Json(json!({ "mensagem": "Endereço deletado com sucesso" })))
}

#[cfg(test)]
mod tests {
    use super::{CreateAddressPayload, UpdateAddressPayload};

    #[test]
    fn create_payload_requires_every_field() {
        let complete = CreateAddressPayload {
            rua: Some("Rua A".into()),
            cidade: Some("São Paulo".into()),
            estado: Some("SP".into()),
            usuario_id: Some(1),
        };
        assert!(complete.into_fields().is_ok());

        let missing_owner = CreateAddressPayload {
            rua: Some("Rua A".into()),
            cidade: Some("São Paulo".into()),
            estado: Some("SP".into()),
            usuario_id: None,
        };
        assert!(missing_owner.into_fields().is_err());
    }

    #[test]
    fn update_payload_rejects_empty_strings() {
        let blank_city = UpdateAddressPayload {
            rua: Some("Rua A".into()),
            cidade: Some("".into()),
            estado: Some("SP".into()),
        };
        assert!(blank_city.into_fields().is_err());
    }
}
