use client_registry::domain::client::Client;
use client_registry::domain::types::ClientEmail;
use client_registry::repository::errors::RepositoryError;
use client_registry::repository::{ClientReader, ClientWriter, DieselRepository};

mod common;

fn client(id: i64, first: &str, last: &str, email: &str) -> Client {
    Client {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
    }
}

#[test]
fn test_client_repository_crud() {
    let test_db = common::TestDb::new("test_client_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = client(1, "Alice", "Smith", "alice@example.com");
    let bob = client(2, "Bob", "Jones", "bob@example.com");

    assert_eq!(repo.insert_client(&alice).unwrap(), alice);
    assert_eq!(repo.insert_client(&bob).unwrap(), bob);

    let items = repo.list_clients().unwrap();
    assert_eq!(items, vec![alice.clone(), bob.clone()]);

    assert_eq!(repo.get_client_by_id(1).unwrap(), Some(alice.clone()));
    assert_eq!(repo.get_client_by_id(404).unwrap(), None);

    assert!(repo.client_exists_by_id(2).unwrap());
    assert!(!repo.client_exists_by_id(3).unwrap());

    let email = ClientEmail::new("bob@example.com").unwrap();
    assert!(repo.client_exists_by_email(&email).unwrap());
    let missing = ClientEmail::new("nobody@example.com").unwrap();
    assert!(!repo.client_exists_by_email(&missing).unwrap());

    repo.delete_client(1).unwrap();
    assert!(repo.get_client_by_id(1).unwrap().is_none());
    assert_eq!(repo.list_clients().unwrap(), vec![bob]);
}

#[test]
fn test_list_is_ordered_by_id() {
    let test_db = common::TestDb::new("test_list_is_ordered_by_id.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for id in [5, 1, 3] {
        let record = client(id, "C", "D", &format!("c{id}@example.com"));
        repo.insert_client(&record).unwrap();
    }

    let ids: Vec<i64> = repo.list_clients().unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn test_duplicate_id_insert_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_id_insert.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.insert_client(&client(1, "Alice", "Smith", "alice@example.com"))
        .unwrap();

    let err = repo
        .insert_client(&client(1, "Other", "Name", "other@example.com"))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_duplicate_email_insert_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_email_insert.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.insert_client(&client(1, "Alice", "Smith", "alice@example.com"))
        .unwrap();

    let err = repo
        .insert_client(&client(2, "Other", "Name", "alice@example.com"))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn test_delete_missing_client_is_not_found() {
    let test_db = common::TestDb::new("test_delete_missing_client.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let err = repo.delete_client(404).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}
