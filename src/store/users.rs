use crate::error::{AppError, AppResult};
use crate::store::models::User;
use crate::store::UserStore;

pub async fn list_users(store: &UserStore) -> Vec<User> {
    store.inner.lock().await.users.clone()
}

pub async fn find_by_id(store: &UserStore, id: i64) -> AppResult<User> {
    store
        .inner
        .lock()
        .await
        .users
        .iter()
        .find(|user| user.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

pub async fn create_user(store: &UserStore, name: String, email: String) -> User {
    let mut inner = store.inner.lock().await;

    let id = inner.next_id;
    inner.next_id += 1;

    let user = User::new(id, name, email);
    inner.users.push(user.clone());

    tracing::debug!(id, "created user");
    user
}

pub async fn update_user(
    store: &UserStore,
    id: i64,
    name: Option<String>,
    email: Option<String>,
) -> AppResult<User> {
    let mut inner = store.inner.lock().await;

    let user = inner
        .users
        .iter_mut()
        .find(|user| user.id == id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    // Partial-update semantics: absent or empty fields leave the stored
    // value unchanged.
    if let Some(name) = name.filter(|name| !name.is_empty()) {
        user.name = name;
    }
    if let Some(email) = email.filter(|email| !email.is_empty()) {
        user.email = email;
    }

    tracing::debug!(id, "updated user");
    Ok(user.clone())
}

pub async fn delete_user(store: &UserStore, id: i64) -> bool {
    let mut inner = store.inner.lock().await;

    let before = inner.users.len();
    inner.users.retain(|user| user.id != id);
    let deleted = inner.users.len() < before;

    if deleted {
        tracing::debug!(id, "deleted user");
    }
    deleted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_lists_two_users() {
        let store = UserStore::new();
        let users = list_users(&store).await;

        assert_eq!(users.len(), 2);
        assert_eq!(users[0], User::new(1, "John Doe", "john@example.com"));
        assert_eq!(users[1], User::new(2, "Jane Smith", "jane@example.com"));
    }

    #[tokio::test]
    async fn create_allocates_strictly_increasing_ids() {
        let store = UserStore::new();

        let first = create_user(&store, "Alice".to_string(), "alice@example.com".to_string()).await;
        let second = create_user(&store, "Bob".to_string(), "bob@example.com".to_string()).await;

        assert_eq!(first.id, 3);
        assert_eq!(second.id, 4);
        assert_eq!(list_users(&store).await.len(), 4);
    }

    #[tokio::test]
    async fn find_by_id_reflects_latest_update() {
        let store = UserStore::new();

        update_user(&store, 1, Some("Updated Name".to_string()), None)
            .await
            .unwrap();

        let user = find_by_id(&store, 1).await.unwrap();
        assert_eq!(user.name, "Updated Name");
        assert_eq!(user.email, "john@example.com");
    }

    #[tokio::test]
    async fn find_by_id_unknown_is_not_found() {
        let store = UserStore::new();
        assert!(matches!(
            find_by_id(&store, 999).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_ignores_empty_fields() {
        let store = UserStore::new();

        let user = update_user(&store, 2, Some(String::new()), Some(String::new()))
            .await
            .unwrap();

        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.email, "jane@example.com");
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let store = UserStore::new();
        let result = update_user(&store, 999, Some("Ghost".to_string()), None).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_idempotent_in_effect_but_reports_once() {
        let store = UserStore::new();

        assert!(delete_user(&store, 2).await);
        assert!(matches!(
            find_by_id(&store, 2).await,
            Err(AppError::NotFound(_))
        ));
        assert!(!delete_user(&store, 2).await);
        assert_eq!(list_users(&store).await.len(), 1);
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reused() {
        let store = UserStore::new();

        assert!(delete_user(&store, 2).await);
        let user = create_user(&store, "Carol".to_string(), "carol@example.com".to_string()).await;

        assert_eq!(user.id, 3);
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = UserStore::new();

        let mut handles = Vec::new();
        for n in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                create_user(&store, format!("User {n}"), format!("user{n}@example.com")).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 16);
    }
}
