use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::SecurityConfig;
use crate::entities::{contacts, loans};
use crate::models::contact::ContactMessage;
use crate::models::loan::LoanApplication;

pub mod migrator;
pub mod repositories;

pub use repositories::user::User;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.starts_with(":memory:") && !db_url.starts_with("sqlite::memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn loan_repo(&self) -> repositories::loan::LoanRepository {
        repositories::loan::LoanRepository::new(self.conn.clone())
    }

    fn contact_repo(&self) -> repositories::contact::ContactRepository {
        repositories::contact::ContactRepository::new(self.conn.clone())
    }

    // ========== User Repository Methods ==========

    pub async fn create_user(
        &self,
        username: &str,
        phone: Option<&str>,
        email: Option<&str>,
        password: &str,
        security: &SecurityConfig,
    ) -> Result<User> {
        self.user_repo()
            .create(username, phone, email, password, security)
            .await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn verify_user_password(&self, username: &str, password: &str) -> Result<bool> {
        self.user_repo().verify_password(username, password).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.user_repo().list_all().await
    }

    // ========== Loan Repository Methods ==========

    pub async fn create_loan(&self, input: &LoanApplication) -> Result<loans::Model> {
        self.loan_repo().create(input).await
    }

    pub async fn list_loans(&self) -> Result<Vec<loans::Model>> {
        self.loan_repo().list_all().await
    }

    pub async fn list_loans_by_full_name(&self, full_name: &str) -> Result<Vec<loans::Model>> {
        self.loan_repo().list_by_full_name(full_name).await
    }

    pub async fn update_loan_status(&self, id: i32, status: &str) -> Result<Option<loans::Model>> {
        self.loan_repo().update_status(id, status).await
    }

    pub async fn count_loans_by_full_name(&self, full_name: &str) -> Result<u64> {
        self.loan_repo().count_by_full_name(full_name).await
    }

    pub async fn count_loans_by_full_name_and_status(
        &self,
        full_name: &str,
        status: &str,
    ) -> Result<u64> {
        self.loan_repo()
            .count_by_full_name_and_status(full_name, status)
            .await
    }

    // ========== Contact Repository Methods ==========

    pub async fn create_contact(&self, input: &ContactMessage) -> Result<contacts::Model> {
        self.contact_repo().create(input).await
    }
}
