pub use crate::configuration;
use crate::routes::addresses::{create_address, delete_address, list_addresses, update_address};
use crate::routes::docs::ApiDoc;
use crate::routes::schema::create_tables;
use crate::routes::users::{create_user, delete_user, list_users, update_user};
use crate::services::address::AddressService;
use crate::services::user::UserService;
use crate::store::address::AddressRepository;
use crate::store::schema::SchemaRepository;
use crate::store::user::UserRepository;

use axum::{
    Router,
    routing::{post, put},
};
use sqlx::mysql::MySqlPoolOptions;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::configuration::get_configuration;

#[derive(Clone, Debug)]
pub struct AppState {
    pub user_service: UserService,
    pub address_service: AddressService,
    pub schema: SchemaRepository,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/criar-tabelas", post(create_tables))
        .route("/users", post(create_user).get(list_users))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .route("/enderecos", post(create_address).get(list_addresses))
        .route(
            "/enderecos/{id}",
            put(update_address).delete(delete_address),
        )
        .merge(SwaggerUi::new("/api-docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() {
    let cfg = get_configuration().expect("could not get config");

    let pool = MySqlPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(cfg.database.with_db());

    {
        // The pool connects lazily; probe it once so a bad configuration
        // shows up in the logs instead of on the first request.
        match pool.acquire().await {
            Ok(_) => tracing::info!("connected to MySQL"),
            Err(e) => tracing::error!("could not reach MySQL at startup: {:?}", e),
        }
    }

    let user_service = UserService::new(UserRepository::new(pool.clone()));
    let address_service = AddressService::new(AddressRepository::new(pool.clone()));
    let schema = SchemaRepository::new(pool);

    let app_state = AppState {
        user_service,
        address_service,
        schema,
    };
    let app = router(app_state);

    let address = format!("{}:{}", cfg.application.host, cfg.application.port);
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap();
    tracing::info!("listening on {}", address);
    axum::serve(listener, app)
        .await
        .expect("could not start server");
}
