use crate::models::user::User;
use sqlx::{MySql, Pool};
use tracing::instrument;

#[derive(Clone, Debug)]
pub struct UserRepository {
    pool: Pool<MySql>,
}

impl UserRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    #[instrument(name = "Saving new user to database", skip(self, senha))]
    pub async fn insert(&self, nome: &str, email: &str, senha: &str) -> anyhow::Result<u64> {
        let result = sqlx::query("INSERT INTO usuarios (nome, email, senha) VALUES (?, ?, ?)")
            .bind(nome)
            .bind(email)
            .bind(senha)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to execute query: {:?}", e);
                e
            })?;
        Ok(result.last_insert_id())
    }

    /// The password column is deliberately left out of the projection.
    #[instrument(name = "Fetching users from database", skip(self))]
    pub async fn list(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, nome, email, criado_em FROM usuarios")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch users: {:?}", e);
                e
            })?;
        Ok(users)
    }

    #[instrument(name = "Updating user in database", skip(self, senha))]
    pub async fn update(
        &self,
        id: i32,
        nome: &str,
        email: &str,
        senha: &str,
    ) -> anyhow::Result<u64> {
        let result = sqlx::query("UPDATE usuarios SET nome = ?, email = ?, senha = ? WHERE id = ?")
            .bind(nome)
            .bind(email)
            .bind(senha)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    #[instrument(name = "Deleting user from database", skip(self))]
    pub async fn delete(&self, id: i32) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
