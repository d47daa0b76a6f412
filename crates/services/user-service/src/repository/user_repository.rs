//! User repository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// A missing record is reported as `None` (or `false` for delete) rather than
/// as an error; the service layer decides what that means to the caller.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored record
    async fn create(&self, name: String, date_of_birth: NaiveDate) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Replace name and date of birth of an existing user
    async fn update(
        &self,
        id: i32,
        name: String,
        date_of_birth: NaiveDate,
    ) -> AppResult<Option<User>>;

    /// Delete user by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// List users ordered by ascending ID
    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, name: String, date_of_birth: NaiveDate) -> AppResult<User> {
        let active_model = ActiveModel {
            name: Set(name),
            dob: Set(date_of_birth),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn update(
        &self,
        id: i32,
        name: String,
        date_of_birth: NaiveDate,
    ) -> AppResult<Option<User>> {
        let Some(existing) = UserEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(name);
        active.dob = Set(date_of_birth);

        match active.update(&self.db).await {
            Ok(model) => Ok(Some(User::from(model))),
            // Deleted between the lookup and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
