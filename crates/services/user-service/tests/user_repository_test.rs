//! Repository tests against an in-memory SQLite database.

mod support;

use support::{date, test_database};
use user_service_lib::repository::{UserRepository, UserStore};

async fn store() -> UserStore {
    UserStore::new(test_database().await.get_connection())
}

#[tokio::test]
async fn test_create_assigns_ids_and_persists_fields() {
    let repo = store().await;

    let ada = repo.create("Ada".to_string(), date(1990, 1, 10)).await.unwrap();
    let grace = repo.create("Grace".to_string(), date(1906, 12, 9)).await.unwrap();

    assert!(grace.id > ada.id);

    let found = repo.find_by_id(ada.id).await.unwrap().unwrap();
    assert_eq!(found, ada);
    assert_eq!(found.date_of_birth, date(1990, 1, 10));
}

#[tokio::test]
async fn test_find_missing_user_returns_none() {
    let repo = store().await;

    assert!(repo.find_by_id(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_replaces_name_and_date_of_birth() {
    let repo = store().await;
    let user = repo.create("Ada".to_string(), date(1990, 1, 10)).await.unwrap();

    let updated = repo
        .update(user.id, "Ada King".to_string(), date(1815, 12, 10))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Ada King");
    assert_eq!(updated.date_of_birth, date(1815, 12, 10));

    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_missing_user_returns_none() {
    let repo = store().await;

    let result = repo
        .update(12, "Nobody".to_string(), date(2000, 1, 1))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_reports_whether_a_row_was_removed() {
    let repo = store().await;
    let user = repo.create("Ada".to_string(), date(1990, 1, 10)).await.unwrap();

    assert!(repo.delete(user.id).await.unwrap());
    assert!(!repo.delete(user.id).await.unwrap());
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_orders_by_id_with_limit_and_offset() {
    let repo = store().await;
    let mut ids = Vec::new();
    for name in ["A", "B", "C", "D", "E"] {
        ids.push(repo.create(name.to_string(), date(2000, 1, 1)).await.unwrap().id);
    }

    let first_two = repo.list(2, 0).await.unwrap();
    assert_eq!(first_two.iter().map(|u| u.id).collect::<Vec<_>>(), ids[..2]);

    let tail = repo.list(50, 3).await.unwrap();
    assert_eq!(
        tail.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["D", "E"]
    );

    assert!(repo.list(10, 10).await.unwrap().is_empty());
}
