//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.
//! DDD: Orchestrates domain operations via Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{ENTITY_PROFILE, ENTITY_USER};
use crate::domain::{CreateUser, Profile, UpdateUser, User};
use crate::errors::{required, AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a new user with a unique username
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Update user details
    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User>;

    /// Delete a user that no longer owns a profile
    async fn delete_user(&self, id: i32) -> AppResult<()>;

    /// Get the profile owned by a user
    async fn get_user_profile(&self, id: i32) -> AppResult<Profile>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_username_free(&self, username: &str, owner: Option<i32>) -> AppResult<()> {
        match self.uow.users().find_by_username(username).await? {
            Some(existing) if Some(existing.id) != owner => Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                username
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found(ENTITY_USER, id)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let username = required(input.username, "username")?;
        self.ensure_username_free(&username, None).await?;

        let user = self.uow.users().create(username).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        self.get_user(id).await?;
        if let Some(username) = &changes.username {
            self.ensure_username_free(username, Some(id)).await?;
        }

        let user = self.uow.users().update(id, changes).await?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.get_user(id).await?;
        if self.uow.profiles().find_by_user_id(id).await?.is_some() {
            return Err(AppError::conflict(format!(
                "{} {} still has a profile",
                ENTITY_USER, id
            )));
        }

        self.uow.users().delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn get_user_profile(&self, id: i32) -> AppResult<Profile> {
        self.get_user(id).await?;
        self.uow
            .profiles()
            .find_by_user_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} of {} {}", ENTITY_PROFILE, ENTITY_USER, id))
            })
    }
}
