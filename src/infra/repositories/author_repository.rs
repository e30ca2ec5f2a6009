//! Author repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::author::{self, ActiveModel, Entity as AuthorEntity};
use crate::config::ENTITY_AUTHOR;
use crate::domain::{Author, UpdateAuthor};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Author repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>>;

    async fn list(&self) -> AppResult<Vec<Author>>;

    async fn create(&self, name: String) -> AppResult<Author>;

    async fn update(&self, id: i32, changes: UpdateAuthor) -> AppResult<Author>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of AuthorRepository
pub struct AuthorStore {
    db: DatabaseConnection,
}

impl AuthorStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorRepository for AuthorStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let result = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Author::from))
    }

    async fn list(&self) -> AppResult<Vec<Author>> {
        let models = AuthorEntity::find()
            .order_by_asc(author::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Author::from).collect())
    }

    async fn create(&self, name: String) -> AppResult<Author> {
        let active_model = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Author::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateAuthor) -> AppResult<Author> {
        let author = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(ENTITY_AUTHOR, id)?;

        let mut active: ActiveModel = author.clone().into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }

        if !active.is_changed() {
            return Ok(Author::from(author));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Author::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = AuthorEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ENTITY_AUTHOR, id));
        }

        Ok(())
    }
}
