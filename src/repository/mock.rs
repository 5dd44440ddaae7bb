//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::Client;
use crate::domain::types::ClientEmail;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: i64) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
        fn client_exists_by_id(&self, id: i64) -> RepositoryResult<bool>;
        fn client_exists_by_email(&self, email: &ClientEmail) -> RepositoryResult<bool>;
    }

    impl ClientWriter for Repository {
        fn insert_client(&self, client: &Client) -> RepositoryResult<Client>;
        fn delete_client(&self, id: i64) -> RepositoryResult<()>;
    }
}
