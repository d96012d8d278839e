pub mod addresses;
pub mod docs;
pub mod schema;
pub mod users;
