use crate::{errors::ApiError, models::user::User, store::user::UserRepository};
use tracing::instrument;

#[derive(Clone, Debug)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    #[instrument(
        name = "UserService: Create user",
        skip(self, senha),
        fields(user_email = %email)
    )]
    pub async fn create(&self, nome: &str, email: &str, senha: &str) -> Result<u64, ApiError> {
        // A duplicate email lands here as well; the unique constraint is the
        // only guard and it surfaces as a generic database error.
        self.repo.insert(nome, email, senha).await.map_err(|e| {
            tracing::error!("Database error while inserting user: {:?}", e);
            ApiError::Database
        })
    }

    #[instrument(name = "UserService: List users", skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list().await.map_err(|e| {
            tracing::error!("Database error while listing users: {:?}", e);
            ApiError::Database
        })
    }

    #[instrument(name = "UserService: Update user", skip(self, senha))]
    pub async fn update(
        &self,
        id: i32,
        nome: &str,
        email: &str,
        senha: &str,
    ) -> Result<(), ApiError> {
        let rows = self.repo.update(id, nome, email, senha).await.map_err(|e| {
            tracing::error!("Database error while updating user: {:?}", e);
            ApiError::Database
        })?;
        if rows == 0 {
            tracing::warn!(user_id = id, "Update matched no user");
        }
        Ok(())
    }

    #[instrument(name = "UserService: Delete user", skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let rows = self.repo.delete(id).await.map_err(|e| {
            tracing::error!("Database error while deleting user: {:?}", e);
            ApiError::Database
        })?;
        if rows == 0 {
            tracing::warn!(user_id = id, "Delete matched no user");
        }
        Ok(())
    }
}
