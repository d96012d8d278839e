use crate::models::address::Address;
use sqlx::{MySql, Pool};
use tracing::instrument;

#[derive(Clone, Debug)]
pub struct AddressRepository {
    pool: Pool<MySql>,
}

impl AddressRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    /// Fails with a foreign key violation when `usuario_id` does not
    /// reference an existing user.
    #[instrument(name = "Saving new address to database", skip(self))]
    pub async fn insert(
        &self,
        rua: &str,
        cidade: &str,
        estado: &str,
        usuario_id: i32,
    ) -> anyhow::Result<u64> {
        let result =
            sqlx::query("INSERT INTO enderecos (rua, cidade, estado, usuario_id) VALUES (?, ?, ?, ?)")
                .bind(rua)
                .bind(cidade)
                .bind(estado)
                .bind(usuario_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to execute query: {:?}", e);
                    e
                })?;
        Ok(result.last_insert_id())
    }

    #[instrument(name = "Fetching addresses from database", skip(self))]
    pub async fn list(&self) -> anyhow::Result<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>(
            r#"SELECT e.id, e.rua, e.cidade, e.estado, e.usuario_id, u.nome AS nome_usuario
            FROM enderecos e
            JOIN usuarios u ON e.usuario_id = u.id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch addresses: {:?}", e);
            e
        })?;
        Ok(addresses)
    }

    #[instrument(name = "Updating address in database", skip(self))]
    pub async fn update(
        &self,
        id: i32,
        rua: &str,
        cidade: &str,
        estado: &str,
    ) -> anyhow::Result<u64> {
        let result = sqlx::query("UPDATE enderecos SET rua = ?, cidade = ?, estado = ? WHERE id = ?")
            .bind(rua)
            .bind(cidade)
            .bind(estado)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    #[instrument(name = "Deleting address from database", skip(self))]
    pub async fn delete(&self, id: i32) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM enderecos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
