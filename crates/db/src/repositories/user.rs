//! User repository for the legacy users table.

use std::sync::Arc;

use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Select,
};

use aprobaciones_shared::types::PageRequest;

use crate::entities::users;

/// Read-only access to `ctbm01`.
#[derive(Debug)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds a user by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(code.to_string())
            .one(self.db.as_ref())
            .await
    }

    /// Lists users ordered by display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<users::Model>, DbErr> {
        list_select(page).all(self.db.as_ref()).await
    }

    /// Counts all users.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        users::Entity::find().count(self.db.as_ref()).await
    }
}

/// Code breaks ties between equal display names.
fn list_select(page: PageRequest) -> Select<users::Entity> {
    users::Entity::find()
        .order_by_asc(users::Column::UserDs)
        .order_by_asc(users::Column::UserCd)
        .offset(page.offset())
        .limit(page.limit())
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
