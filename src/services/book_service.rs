//! Book service - every book belongs to an existing author.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{ENTITY_AUTHOR, ENTITY_BOOK};
use crate::domain::{Book, CreateBook, UpdateBook};
use crate::errors::{required, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Book service trait for dependency injection.
#[async_trait]
pub trait BookService: Send + Sync {
    async fn get_book(&self, id: i32) -> AppResult<Book>;

    async fn list_books(&self) -> AppResult<Vec<Book>>;

    /// Create a book for an existing author
    async fn create_book(&self, input: CreateBook) -> AppResult<Book>;

    /// Update book fields; a new `author_id` must reference an existing author
    async fn update_book(&self, id: i32, changes: UpdateBook) -> AppResult<Book>;

    async fn delete_book(&self, id: i32) -> AppResult<()>;
}

pub struct BookManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BookManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_author_exists(&self, author_id: i32) -> AppResult<()> {
        self.uow
            .authors()
            .find_by_id(author_id)
            .await?
            .ok_or_not_found(ENTITY_AUTHOR, author_id)
            .map(|_| ())
    }
}

#[async_trait]
impl<U: UnitOfWork> BookService for BookManager<U> {
    async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.uow
            .books()
            .find_by_id(id)
            .await?
            .ok_or_not_found(ENTITY_BOOK, id)
    }

    async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.uow.books().list().await
    }

    async fn create_book(&self, input: CreateBook) -> AppResult<Book> {
        let title = required(input.title, "title")?;
        let author_id = required(input.author_id, "author_id")?;
        self.ensure_author_exists(author_id).await?;

        let book = self.uow.books().create(title, author_id).await?;
        tracing::info!(book_id = book.id, author_id, "Book created");
        Ok(book)
    }

    async fn update_book(&self, id: i32, changes: UpdateBook) -> AppResult<Book> {
        self.get_book(id).await?;
        if let Some(author_id) = changes.author_id {
            self.ensure_author_exists(author_id).await?;
        }

        let book = self.uow.books().update(id, changes).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(book)
    }

    async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.uow.books().delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::domain::Author;
    use crate::errors::AppError;
    use crate::infra::{MockAuthorRepository, MockBookRepository};
    use crate::services::test_support::TestUnitOfWork;

    #[tokio::test]
    async fn test_create_book_for_missing_author() {
        let mut authors = MockAuthorRepository::new();
        authors.expect_find_by_id().with(eq(99)).returning(|_| Ok(None));
        let mut books = MockBookRepository::new();
        books.expect_create().never();

        let uow = TestUnitOfWork::default()
            .with_authors(authors)
            .with_books(books);
        let service = BookManager::new(Arc::new(uow));
        let input = CreateBook {
            title: Some("X".to_string()),
            author_id: Some(99),
        };
        let err = assert_err!(service.create_book(input).await);

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "Author 99 not found");
    }

    #[tokio::test]
    async fn test_create_book_success() {
        let mut authors = MockAuthorRepository::new();
        authors.expect_find_by_id().returning(|id| {
            Ok(Some(Author {
                id,
                name: "Orwell".to_string(),
            }))
        });
        let mut books = MockBookRepository::new();
        books
            .expect_create()
            .with(eq("1984".to_string()), eq(1))
            .returning(|title, author_id| {
                Ok(Book {
                    id: 1,
                    title,
                    author_id,
                })
            });

        let uow = TestUnitOfWork::default()
            .with_authors(authors)
            .with_books(books);
        let service = BookManager::new(Arc::new(uow));
        let input = CreateBook {
            title: Some("1984".to_string()),
            author_id: Some(1),
        };
        let book = assert_ok!(service.create_book(input).await);

        assert_eq!(book.author_id, 1);
        assert_eq!(book.title, "1984");
    }

    #[tokio::test]
    async fn test_create_book_missing_title() {
        let service = BookManager::new(Arc::new(TestUnitOfWork::default()));
        let input = CreateBook {
            title: None,
            author_id: Some(1),
        };
        let err = assert_err!(service.create_book(input).await);

        assert!(matches!(err, AppError::Validation(_)));
    }
}
