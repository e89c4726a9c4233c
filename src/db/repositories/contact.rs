use anyhow::Result;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::entities::contacts;
use crate::models::contact::ContactMessage;

/// Repository for contact-form submissions. Write-only: nothing in the
/// service reads these back.
pub struct ContactRepository {
    conn: DatabaseConnection,
}

impl ContactRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a submission stamped with the current time. Required fields
    /// are enforced by the store's NOT NULL columns; an absent field is
    /// left unset and the insert fails.
    pub async fn create(&self, input: &ContactMessage) -> Result<contacts::Model> {
        let active = contacts::ActiveModel {
            name: input.name.clone().map_or(NotSet, Set),
            email: input.email.clone().map_or(NotSet, Set),
            phone: input.phone.clone().map_or(NotSet, Set),
            subject: input.subject.clone().map_or(NotSet, Set),
            message: input.message.clone().map_or(NotSet, Set),
            sent_at: Set(Utc::now().to_rfc3339()),
            ..Default::default()
        };

        Ok(active.insert(&self.conn).await?)
    }
}
