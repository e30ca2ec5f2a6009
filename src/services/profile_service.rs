//! Profile service - one profile per user.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{ENTITY_PROFILE, ENTITY_USER};
use crate::domain::{CreateProfile, Profile, UpdateProfile};
use crate::errors::{required, AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn get_profile(&self, id: i32) -> AppResult<Profile>;

    async fn list_profiles(&self) -> AppResult<Vec<Profile>>;

    /// Create a profile for an existing user that has none yet
    async fn create_profile(&self, input: CreateProfile) -> AppResult<Profile>;

    /// Update profile fields; a new `user_id` is re-checked
    async fn update_profile(&self, id: i32, changes: UpdateProfile) -> AppResult<Profile>;

    async fn delete_profile(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ProfileService using Unit of Work.
pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// The user must exist and must not own a profile already.
    async fn ensure_user_can_own_profile(&self, user_id: i32) -> AppResult<()> {
        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_not_found(ENTITY_USER, user_id)?;

        if self.uow.profiles().find_by_user_id(user_id).await?.is_some() {
            return Err(AppError::conflict(format!(
                "{} {} already has a profile",
                ENTITY_USER, user_id
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileService for ProfileManager<U> {
    async fn get_profile(&self, id: i32) -> AppResult<Profile> {
        self.uow
            .profiles()
            .find_by_id(id)
            .await?
            .ok_or_not_found(ENTITY_PROFILE, id)
    }

    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        self.uow.profiles().list().await
    }

    async fn create_profile(&self, input: CreateProfile) -> AppResult<Profile> {
        let bio = required(input.bio, "bio")?;
        let user_id = required(input.user_id, "user_id")?;
        self.ensure_user_can_own_profile(user_id).await?;

        let profile = self.uow.profiles().create(bio, user_id).await?;
        tracing::info!(profile_id = profile.id, user_id, "Profile created");
        Ok(profile)
    }

    async fn update_profile(&self, id: i32, changes: UpdateProfile) -> AppResult<Profile> {
        let current = self.get_profile(id).await?;
        if let Some(user_id) = changes.user_id {
            if user_id != current.user_id {
                self.ensure_user_can_own_profile(user_id).await?;
            }
        }

        let profile = self.uow.profiles().update(id, changes).await?;
        tracing::info!(profile_id = id, "Profile updated");
        Ok(profile)
    }

    async fn delete_profile(&self, id: i32) -> AppResult<()> {
        self.uow.profiles().delete(id).await?;
        tracing::info!(profile_id = id, "Profile deleted");
        Ok(())
    }
}
