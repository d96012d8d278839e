pub mod address;
pub mod schema;
pub mod user;

pub use address::AddressRepository;
pub use schema::SchemaRepository;
pub use user::UserRepository;
