//! Profile repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::profile::{self, ActiveModel, Entity as ProfileEntity};
use crate::config::ENTITY_PROFILE;
use crate::domain::{Profile, UpdateProfile};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Profile repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Profile>>;

    /// Find the profile owned by a user
    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Option<Profile>>;

    /// List all profiles ordered by ID
    async fn list(&self) -> AppResult<Vec<Profile>>;

    /// Create a new profile
    async fn create(&self, bio: String, user_id: i32) -> AppResult<Profile>;

    /// Overwrite the supplied fields of an existing profile
    async fn update(&self, id: i32, changes: UpdateProfile) -> AppResult<Profile>;

    /// Delete profile by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ProfileRepository
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Profile>> {
        let result = ProfileEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Profile::from))
    }

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Option<Profile>> {
        let result = ProfileEntity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Profile::from))
    }

    async fn list(&self) -> AppResult<Vec<Profile>> {
        let models = ProfileEntity::find()
            .order_by_asc(profile::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Profile::from).collect())
    }

    async fn create(&self, bio: String, user_id: i32) -> AppResult<Profile> {
        let active_model = ActiveModel {
            bio: Set(bio),
            user_id: Set(user_id),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Profile::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateProfile) -> AppResult<Profile> {
        let profile = ProfileEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(ENTITY_PROFILE, id)?;

        let mut active: ActiveModel = profile.clone().into();

        if let Some(bio) = changes.bio {
            active.bio = Set(bio);
        }
        if let Some(user_id) = changes.user_id {
            active.user_id = Set(user_id);
        }

        if !active.is_changed() {
            return Ok(Profile::from(profile));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Profile::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ProfileEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ENTITY_PROFILE, id));
        }

        Ok(())
    }
}
