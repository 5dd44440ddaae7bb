use diesel::dsl::exists;
use diesel::prelude::*;

use crate::db::{DbPool, get_connection};
use crate::domain::client::Client;
use crate::domain::types::ClientEmail;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter};

/// Diesel implementation of the client store capability.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: i64) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = get_connection(&self.pool)?;
        let client = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = get_connection(&self.pool)?;
        let items = clients::table
            .order(clients::id.asc())
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn client_exists_by_id(&self, id: i64) -> RepositoryResult<bool> {
        use crate::schema::clients;

        let mut conn = get_connection(&self.pool)?;
        let found = diesel::select(exists(clients::table.find(id))).get_result(&mut conn)?;

        Ok(found)
    }

    fn client_exists_by_email(&self, email: &ClientEmail) -> RepositoryResult<bool> {
        use crate::schema::clients;

        let mut conn = get_connection(&self.pool)?;
        let found = diesel::select(exists(
            clients::table.filter(clients::email.eq(email.as_str())),
        ))
        .get_result(&mut conn)?;

        Ok(found)
    }
}

impl ClientWriter for DieselRepository {
    fn insert_client(&self, client: &Client) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
        use crate::schema::clients;

        let mut conn = get_connection(&self.pool)?;
        let insertable: DbNewClient = client.into();
        let stored = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(stored.into())
    }

    fn delete_client(&self, id: i64) -> RepositoryResult<()> {
        use crate::schema::clients;

        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::delete(clients::table.find(id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
