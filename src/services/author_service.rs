//! Author service - authors and the books they own.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ENTITY_AUTHOR;
use crate::domain::{Author, Book, CreateAuthor, UpdateAuthor};
use crate::errors::{required, AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Author service trait for dependency injection.
#[async_trait]
pub trait AuthorService: Send + Sync {
    async fn get_author(&self, id: i32) -> AppResult<Author>;

    async fn list_authors(&self) -> AppResult<Vec<Author>>;

    async fn create_author(&self, input: CreateAuthor) -> AppResult<Author>;

    async fn update_author(&self, id: i32, changes: UpdateAuthor) -> AppResult<Author>;

    /// Delete an author that no longer has books
    async fn delete_author(&self, id: i32) -> AppResult<()>;

    /// Books written by an author
    async fn get_author_books(&self, id: i32) -> AppResult<Vec<Book>>;
}

pub struct AuthorManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AuthorManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthorService for AuthorManager<U> {
    async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.uow
            .authors()
            .find_by_id(id)
            .await?
            .ok_or_not_found(ENTITY_AUTHOR, id)
    }

    async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.uow.authors().list().await
    }

    async fn create_author(&self, input: CreateAuthor) -> AppResult<Author> {
        let name = required(input.name, "name")?;

        let author = self.uow.authors().create(name).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    async fn update_author(&self, id: i32, changes: UpdateAuthor) -> AppResult<Author> {
        let author = self.uow.authors().update(id, changes).await?;
        tracing::info!(author_id = id, "Author updated");
        Ok(author)
    }

    async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.get_author(id).await?;

        let books = self.uow.books().count_by_author(id).await?;
        if books > 0 {
            return Err(AppError::conflict(format!(
                "{} {} still has {} book(s)",
                ENTITY_AUTHOR, id, books
            )));
        }

        self.uow.authors().delete(id).await?;
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }

    async fn get_author_books(&self, id: i32) -> AppResult<Vec<Book>> {
        self.get_author(id).await?;
        self.uow.books().list_by_author(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::infra::{MockAuthorRepository, MockBookRepository};
    use crate::services::test_support::TestUnitOfWork;

    fn orwell(id: i32) -> Author {
        Author {
            id,
            name: "Orwell".to_string(),
        }
    }

    #[tokio::test]
    async fn test_delete_author_with_books_is_refused() {
        let mut authors = MockAuthorRepository::new();
        authors
            .expect_find_by_id()
            .returning(|id| Ok(Some(orwell(id))));
        authors.expect_delete().never();
        let mut books = MockBookRepository::new();
        books
            .expect_count_by_author()
            .with(eq(1))
            .returning(|_| Ok(2));

        let uow = TestUnitOfWork::default()
            .with_authors(authors)
            .with_books(books);
        let service = AuthorManager::new(Arc::new(uow));
        let err = assert_err!(service.delete_author(1).await);

        assert_eq!(err.to_string(), "Author 1 still has 2 book(s)");
    }

    #[tokio::test]
    async fn test_delete_author_without_books() {
        let mut authors = MockAuthorRepository::new();
        authors
            .expect_find_by_id()
            .returning(|id| Ok(Some(orwell(id))));
        authors
            .expect_delete()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(()));
        let mut books = MockBookRepository::new();
        books.expect_count_by_author().returning(|_| Ok(0));

        let uow = TestUnitOfWork::default()
            .with_authors(authors)
            .with_books(books);
        let service = AuthorManager::new(Arc::new(uow));

        assert_ok!(service.delete_author(5).await);
    }

    #[tokio::test]
    async fn test_books_of_missing_author() {
        let mut authors = MockAuthorRepository::new();
        authors.expect_find_by_id().returning(|_| Ok(None));
        let mut books = MockBookRepository::new();
        books.expect_list_by_author().never();

        let uow = TestUnitOfWork::default()
            .with_authors(authors)
            .with_books(books);
        let service = AuthorManager::new(Arc::new(uow));
        let err = assert_err!(service.get_author_books(3).await);

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
