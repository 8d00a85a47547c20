//! crates/tooldex_core/src/directory.rs
//!
//! The application-state aggregate: catalog, filter criteria, favorites
//! ledger, and the current session identity, with explicit transition
//! methods instead of ambient mutable state. Transitions that touch
//! persistence go through the `FavoritesStore` port; everything else is
//! pure in-memory mutation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::{Tool, ToolId, User};
use crate::filter::{filter_and_sort, Filter};
use crate::ports::{Credentials, CredentialVerifier, FavoritesStore, PortResult};

/// The whole in-process state tree, mutated sequentially by user intents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Directory {
    pub catalog: Catalog,
    pub filter: Filter,
    pub favorites: BTreeSet<ToolId>,
    pub user: Option<User>,
}

impl Directory {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Directory::default()
        }
    }

    /// The records visible under the current criteria, in sort order.
    pub fn visible(&self) -> Vec<&Tool> {
        filter_and_sort(self.catalog.tools(), &self.filter, &self.favorites)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_favorite(&self, id: ToolId) -> bool {
        self.favorites.contains(&id)
    }

    //=====================================================================================
    // Session transitions
    //=====================================================================================

    /// Verifies the credentials through the pluggable verifier, then adopts
    /// the returned identity and reloads that user's persisted favorites
    /// (an absent entry starts the set empty).
    pub async fn login(
        &mut self,
        credentials: &Credentials,
        verifier: &dyn CredentialVerifier,
        store: &dyn FavoritesStore,
    ) -> PortResult<User> {
        let user = verifier.verify(credentials).await?;
        self.favorites = store.load(&user.email).await?.unwrap_or_default();
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Flushes the current favorites under the user's key, then clears the
    /// session. Favorites-only filtering is forced off since an anonymous
    /// session has no favorites to show. A no-op when already anonymous.
    pub async fn logout(&mut self, store: &dyn FavoritesStore) -> PortResult<()> {
        if let Some(user) = self.user.take() {
            store.save(&user.email, &self.favorites).await?;
        }
        self.favorites.clear();
        self.filter.favorites_only = false;
        Ok(())
    }

    //=====================================================================================
    // Favorites transitions
    //=====================================================================================

    /// Adds the id if absent, removes it if present, and flushes the set
    /// while a user is signed in. Returns whether the tool is now a
    /// favorite. The UI only offers this while a session is active, but an
    /// anonymous toggle is still a consistent in-memory mutation.
    pub async fn toggle_favorite(
        &mut self,
        id: ToolId,
        store: &dyn FavoritesStore,
    ) -> PortResult<bool> {
        let now_favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        };
        if let Some(user) = &self.user {
            store.save(&user.email, &self.favorites).await?;
        }
        Ok(now_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Pricing, ToolDraft};
    use crate::ports::PortError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// In-memory store standing in for the on-disk adapter.
    #[derive(Default)]
    struct MemoryStore {
        entries: Mutex<HashMap<String, BTreeSet<ToolId>>>,
    }

    #[async_trait]
    impl FavoritesStore for MemoryStore {
        async fn load(&self, email: &str) -> PortResult<Option<BTreeSet<ToolId>>> {
            Ok(self.entries.lock().unwrap().get(email).cloned())
        }

        async fn save(&self, email: &str, favorites: &BTreeSet<ToolId>) -> PortResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(email.to_string(), favorites.clone());
            Ok(())
        }
    }

    struct AcceptAll;

    #[async_trait]
    impl CredentialVerifier for AcceptAll {
        async fn verify(&self, credentials: &Credentials) -> PortResult<User> {
            Ok(User {
                id: Uuid::new_v4(),
                name: credentials.name.clone().unwrap_or_else(|| "demo".to_string()),
                email: credentials.email.clone(),
            })
        }
    }

    struct RejectAll;

    #[async_trait]
    impl CredentialVerifier for RejectAll {
        async fn verify(&self, _credentials: &Credentials) -> PortResult<User> {
            Err(PortError::Rejected("no accounts here".to_string()))
        }
    }

    fn credentials(email: &str) -> Credentials {
        Credentials {
            name: None,
            email: email.to_string(),
            password: "hunter2".to_string(),
        }
    }

    fn seeded_directory() -> Directory {
        let mut catalog = Catalog::default();
        catalog.add(ToolDraft {
            name: "Chat".to_string(),
            website: "https://chat.example".to_string(),
            category: Category::TextGeneration,
            pricing: Pricing::Free,
            tags: "nlp".to_string(),
            ..ToolDraft::default()
        });
        catalog.add(ToolDraft {
            name: "Paint".to_string(),
            website: "https://paint.example".to_string(),
            category: Category::ImageGeneration,
            pricing: Pricing::Paid,
            tags: "art".to_string(),
            ..ToolDraft::default()
        });
        Directory::new(catalog)
    }

    #[tokio::test]
    async fn login_failure_leaves_the_session_anonymous() {
        let mut directory = seeded_directory();
        let store = MemoryStore::default();

        let result = directory
            .login(&credentials("ada@example.com"), &RejectAll, &store)
            .await;
        assert!(matches!(result, Err(PortError::Rejected(_))));
        assert!(!directory.is_signed_in());
    }

    #[tokio::test]
    async fn favorites_round_trip_across_logout_and_login() {
        let mut directory = seeded_directory();
        let store = MemoryStore::default();
        let chat_id = directory.catalog.tools()[0].id;

        directory
            .login(&credentials("ada@example.com"), &AcceptAll, &store)
            .await
            .unwrap();
        directory.toggle_favorite(chat_id, &store).await.unwrap();
        directory.logout(&store).await.unwrap();
        assert!(directory.favorites.is_empty());

        // A fresh login with the same email restores the persisted set and
        // favorites-only filtering shows exactly the favorited tool.
        directory
            .login(&credentials("ada@example.com"), &AcceptAll, &store)
            .await
            .unwrap();
        assert_eq!(directory.favorites, [chat_id].into_iter().collect());

        directory.filter.favorites_only = true;
        let visible = directory.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, chat_id);
    }

    #[tokio::test]
    async fn unfavoriting_the_last_tool_is_persisted() {
        let mut directory = seeded_directory();
        let store = MemoryStore::default();
        let chat_id = directory.catalog.tools()[0].id;

        directory
            .login(&credentials("ada@example.com"), &AcceptAll, &store)
            .await
            .unwrap();
        directory.toggle_favorite(chat_id, &store).await.unwrap();
        directory.toggle_favorite(chat_id, &store).await.unwrap();
        directory.logout(&store).await.unwrap();

        directory
            .login(&credentials("ada@example.com"), &AcceptAll, &store)
            .await
            .unwrap();
        assert!(directory.favorites.is_empty());
    }

    #[tokio::test]
    async fn logout_forces_favorites_only_off() {
        let mut directory = seeded_directory();
        let store = MemoryStore::default();

        directory
            .login(&credentials("ada@example.com"), &AcceptAll, &store)
            .await
            .unwrap();
        directory.filter.favorites_only = true;
        directory.logout(&store).await.unwrap();

        assert!(!directory.filter.favorites_only);
        assert!(!directory.is_signed_in());
    }

    #[tokio::test]
    async fn toggle_favorite_reports_membership() {
        let mut directory = seeded_directory();
        let store = MemoryStore::default();
        let chat_id = directory.catalog.tools()[0].id;

        directory
            .login(&credentials("ada@example.com"), &AcceptAll, &store)
            .await
            .unwrap();
        assert!(directory.toggle_favorite(chat_id, &store).await.unwrap());
        assert!(directory.is_favorite(chat_id));
        assert!(!directory.toggle_favorite(chat_id, &store).await.unwrap());
        assert!(!directory.is_favorite(chat_id));
    }

    #[tokio::test]
    async fn each_user_keeps_a_separate_ledger() {
        let mut directory = seeded_directory();
        let store = MemoryStore::default();
        let chat_id = directory.catalog.tools()[0].id;
        let paint_id = directory.catalog.tools()[1].id;

        directory
            .login(&credentials("ada@example.com"), &AcceptAll, &store)
            .await
            .unwrap();
        directory.toggle_favorite(chat_id, &store).await.unwrap();
        directory.logout(&store).await.unwrap();

        directory
            .login(&credentials("grace@example.com"), &AcceptAll, &store)
            .await
            .unwrap();
        assert!(directory.favorites.is_empty());
        directory.toggle_favorite(paint_id, &store).await.unwrap();
        directory.logout(&store).await.unwrap();

        directory
            .login(&credentials("ada@example.com"), &AcceptAll, &store)
            .await
            .unwrap();
        assert_eq!(directory.favorites, [chat_id].into_iter().collect());
    }
}
