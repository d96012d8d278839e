use sqlx::{MySql, Pool};
use tracing::instrument;

const CREATE_USUARIOS: &str = r#"
    CREATE TABLE IF NOT EXISTS usuarios (
      id INT PRIMARY KEY AUTO_INCREMENT,
      nome VARCHAR(100) NOT NULL,
      email VARCHAR(100) NOT NULL UNIQUE,
      senha VARCHAR(100) NOT NULL,
      criado_em TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_ENDERECOS: &str = r#"
    CREATE TABLE IF NOT EXISTS enderecos (
      id INT PRIMARY KEY AUTO_INCREMENT,
      rua VARCHAR(100) NOT NULL,
      cidade VARCHAR(100) NOT NULL,
      estado VARCHAR(50) NOT NULL,
      usuario_id INT NOT NULL,
      FOREIGN KEY (usuario_id) REFERENCES usuarios(id)
        ON DELETE CASCADE
        ON UPDATE CASCADE
    )
"#;

/// Issues the idempotent `CREATE TABLE IF NOT EXISTS` statements. `usuarios`
/// must exist before `enderecos` because of the foreign key, so callers
/// create them in that order and stop at the first failure.
#[derive(Clone, Debug)]
pub struct SchemaRepository {
    pool: Pool<MySql>,
}

impl SchemaRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    #[instrument(name = "Creating usuarios table", skip(self))]
    pub async fn create_usuarios(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_USUARIOS).execute(&self.pool).await?;
        Ok(())
    }

    #[instrument(name = "Creating enderecos table", skip(self))]
    pub async fn create_enderecos(&self) -> anyhow::Result<()> {
        sqlx::query(CREATE_ENDERECOS).execute(&self.pool).await?;
        Ok(())
    }
}
