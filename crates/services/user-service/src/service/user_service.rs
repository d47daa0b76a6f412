//! User service - Handles user-related business logic.
//!
//! Validates inbound payloads, translates missing records into `NotFound`,
//! and shapes responses. Ages are only computed for reads; create and update
//! echo the stored fields.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::validation::{parse_date, validate};
use domain::{Clock, UserRequest, UserResponse};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user
    async fn create_user(&self, request: UserRequest) -> AppResult<UserResponse>;

    /// Get user by ID with age computed as of today
    async fn get_user(&self, id: i32) -> AppResult<UserResponse>;

    /// Replace name and date of birth of an existing user
    async fn update_user(&self, id: i32, request: UserRequest) -> AppResult<UserResponse>;

    /// Permanently delete a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;

    /// List users in storage order, all ages computed against one date
    async fn list_users(&self, limit: u64, offset: u64) -> AppResult<Vec<UserResponse>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserManager {
    /// Create new user service instance with repository and clock
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn user_entity(id: i32) -> String {
    format!("User {}", id)
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, request: UserRequest) -> AppResult<UserResponse> {
        validate(&request)?;
        let date_of_birth = parse_date(&request.dob)?;

        let user = self.repo.create(request.name, date_of_birth).await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(UserResponse::from(user))
    }

    async fn get_user(&self, id: i32) -> AppResult<UserResponse> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(user_entity(id))?;

        Ok(UserResponse::with_age(user, self.clock.today()))
    }

    async fn update_user(&self, id: i32, request: UserRequest) -> AppResult<UserResponse> {
        validate(&request)?;
        let date_of_birth = parse_date(&request.dob)?;

        let user = self
            .repo
            .update(id, request.name, date_of_birth)
            .await?
            .ok_or_not_found(user_entity(id))?;
        tracing::info!(user_id = user.id, "User updated");

        Ok(UserResponse::from(user))
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo
            .delete(id)
            .await?
            .then_some(())
            .ok_or_not_found(user_entity(id))?;
        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }

    async fn list_users(&self, limit: u64, offset: u64) -> AppResult<Vec<UserResponse>> {
        let users = self.repo.list(limit, offset).await?;

        let today = self.clock.today();
        Ok(users
            .into_iter()
            .map(|user| UserResponse::with_age(user, today))
            .collect())
    }
}
