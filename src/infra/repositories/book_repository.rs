//! Book repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::book::{self, ActiveModel, Entity as BookEntity};
use crate::config::ENTITY_BOOK;
use crate::domain::{Book, UpdateBook};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Book repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find book by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// List all books ordered by ID
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// List the books written by one author, ordered by ID
    async fn list_by_author(&self, author_id: i32) -> AppResult<Vec<Book>>;

    /// Count the books written by one author
    async fn count_by_author(&self, author_id: i32) -> AppResult<u64>;

    /// Create a new book
    async fn create(&self, title: String, author_id: i32) -> AppResult<Book>;

    /// Overwrite the supplied fields of an existing book
    async fn update(&self, id: i32, changes: UpdateBook) -> AppResult<Book>;

    /// Delete book by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BookRepository
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let result = BookEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Book::from))
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    async fn list_by_author(&self, author_id: i32) -> AppResult<Vec<Book>> {
        let models = BookEntity::find()
            .filter(book::Column::AuthorId.eq(author_id))
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Book::from).collect())
    }

    async fn count_by_author(&self, author_id: i32) -> AppResult<u64> {
        BookEntity::find()
            .filter(book::Column::AuthorId.eq(author_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, title: String, author_id: i32) -> AppResult<Book> {
        let active_model = ActiveModel {
            title: Set(title),
            author_id: Set(author_id),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Book::from(model))
    }

    async fn update(&self, id: i32, changes: UpdateBook) -> AppResult<Book> {
        let book = BookEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(ENTITY_BOOK, id)?;

        let mut active: ActiveModel = book.clone().into();

        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(author_id) = changes.author_id {
            active.author_id = Set(author_id);
        }

        if !active.is_changed() {
            return Ok(Book::from(book));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Book::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = BookEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ENTITY_BOOK, id));
        }

        Ok(())
    }
}
