use utoipa::OpenApi;

use crate::models::{address::Address, user::User};
use crate::routes::addresses::{CreateAddressPayload, CreatedAddress, UpdateAddressPayload};
use crate::routes::users::{CreatedUser, UserPayload};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Usuários e Endereços",
        description = "CRUD de usuários e endereços com documentação gerada automaticamente"
    ),
    paths(
        crate::routes::schema::create_tables,
        crate::routes::users::create_user,
        crate::routes::users::list_users,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
        crate::routes::addresses::create_address,
        crate::routes::addresses::list_addresses,
        crate::routes::addresses::update_address,
        crate::routes::addresses::delete_address,
    ),
    components(schemas(
        User,
        Address,
        UserPayload,
        CreatedUser,
        CreateAddressPayload,
        UpdateAddressPayload,
        CreatedAddress,
    )),
    tags(
        (name = "tabelas", description = "Criação do esquema"),
        (name = "usuarios", description = "Operações sobre usuários"),
        (name = "enderecos", description = "Operações sobre endereços")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn document_lists_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/criar-tabelas",
            "/users",
            "/users/{id}",
            "/enderecos",
            "/enderecos/{id}",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn user_schema_never_mentions_the_password() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let user = &doc["components"]["schemas"]["User"]["properties"];
        assert!(user.get("senha").is_none());
        assert!(user.get("email").is_some());
    }
}
