//! Client management operations.
//!
//! This is the decision logic of the registry: shape validation, uniqueness
//! policy and the error taxonomy. Everything else in the crate adapts these
//! functions to HTTP and SQLite.

use crate::domain::client::{Client, NewClient};
use crate::domain::types::{ClientEmail, ClientName};
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every stored client, ordered by id ascending.
pub fn list_clients<R>(repo: &R) -> ServiceResult<Vec<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.list_clients().map_err(ServiceError::from)
}

/// Fetches a client by its identifier, failing with
/// [`ServiceError::NotFound`] when no such record exists.
pub fn get_client_by_id<R>(repo: &R, id: i64) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Validates the candidate, checks uniqueness against the store and persists
/// the record, echoing back what was stored.
///
/// Shape validation runs first so malformed input never reaches the store:
/// empty names, an empty email or an email without the `local@domain` shape
/// fail with [`ServiceError::BadArguments`]. A candidate whose id or email is
/// already present fails with [`ServiceError::AlreadyExists`] and leaves the
/// store unchanged. Re-saving an existing id is a conflict, not an update.
///
/// Normalization is part of the contract, not incidental: names are trimmed
/// and the email is trimmed and lower-cased before the uniqueness check and
/// the write, so the echoed record carries the normalized values and email
/// uniqueness is case-insensitive.
pub fn save_client<R>(repo: &R, candidate: &NewClient) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let first_name =
        ClientName::new(&candidate.first_name).map_err(|_| ServiceError::BadArguments)?;
    let last_name =
        ClientName::new(&candidate.last_name).map_err(|_| ServiceError::BadArguments)?;
    let email = ClientEmail::new(&candidate.email).map_err(|_| ServiceError::BadArguments)?;

    if repo.client_exists_by_id(candidate.id)? || repo.client_exists_by_email(&email)? {
        return Err(ServiceError::AlreadyExists);
    }

    let client = Client {
        id: candidate.id,
        first_name: first_name.into_inner(),
        last_name: last_name.into_inner(),
        email: email.into_inner(),
    };

    repo.insert_client(&client).map_err(ServiceError::from)
}

/// Removes the client with the given id, failing with
/// [`ServiceError::NotFound`] when no such record exists.
pub fn delete_client_by_id<R>(repo: &R, id: i64) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    repo.delete_client(id).map_err(ServiceError::from)
}
