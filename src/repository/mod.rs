use crate::domain::client::Client;
use crate::domain::types::ClientEmail;
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use client::DieselRepository;

/// Read side of the client store capability.
pub trait ClientReader {
    fn get_client_by_id(&self, id: i64) -> RepositoryResult<Option<Client>>;
    /// Returns every stored client ordered by id ascending.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    fn client_exists_by_id(&self, id: i64) -> RepositoryResult<bool>;
    fn client_exists_by_email(&self, email: &ClientEmail) -> RepositoryResult<bool>;
}

/// Write side of the client store capability.
pub trait ClientWriter {
    /// Inserts a new record. The store's unique constraints on id and email
    /// are the atomic backstop against concurrent duplicate inserts; a
    /// conflicting insert surfaces as
    /// [`errors::RepositoryError::ConstraintViolation`].
    fn insert_client(&self, client: &Client) -> RepositoryResult<Client>;
    /// Removes the record with the given id, failing with
    /// [`errors::RepositoryError::NotFound`] when absent.
    fn delete_client(&self, id: i64) -> RepositoryResult<()>;
}
