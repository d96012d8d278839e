use crate::{errors::ApiError, models::address::Address, store::address::AddressRepository};
use tracing::instrument;

#[derive(Clone, Debug)]
pub struct AddressService {
    repo: AddressRepository,
}

impl AddressService {
    pub fn new(repo: AddressRepository) -> Self {
        Self { repo }
    }

    #[instrument(name = "AddressService: Create address", skip(self))]
    pub async fn create(
        &self,
        rua: &str,
        cidade: &str,
        estado: &str,
        usuario_id: i32,
    ) -> Result<u64, ApiError> {
        self.repo
            .insert(rua, cidade, estado, usuario_id)
            .await
            .map_err(|e| {
                tracing::error!("Database error while inserting address: {:?}", e);
                ApiError::Database
            })
    }

    #[instrument(name = "AddressService: List addresses", skip(self))]
    pub async fn list(&self) -> Result<Vec<Address>, ApiError> {
        self.repo.list().await.map_err(|e| {
            tracing::error!("Database error while listing addresses: {:?}", e);
            ApiError::Database
        })
    }

    #[instrument(name = "AddressService: Update address", skip(self))]
    pub async fn update(
        &self,
        id: i32,
        rua: &str,
        cidade: &str,
        estado: &str,
    ) -> Result<(), ApiError> {
        let rows = self.repo.update(id, rua, cidade, estado).await.map_err(|e| {
            tracing::error!("Database error while updating address: {:?}", e);
            ApiError::Database
        })?;
        if rows == 0 {
            tracing::warn!(address_id = id, "Update matched no address");
        }
        Ok(())
    }

    #[instrument(name = "AddressService: Delete address", skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let rows = self.repo.delete(id).await.map_err(|e| {
            tracing::error!("Database error while deleting address: {:?}", e);
            ApiError::Database
        })?;
        if rows == 0 {
            tracing::warn!(address_id = id, "Delete matched no address");
        }
        Ok(())
    }
}
