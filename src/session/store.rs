use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::types::FoodItem;

/// Form state of one interactive session: the food items accumulated for the
/// next meal submission, and the player id remembered from the last
/// successful one so the shell can pre-select it.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    pub pending_items: Vec<FoodItem>,
    pub remembered_player_id: Option<String>,
}

/// Server-side home of the per-session form state. A session never issues
/// concurrent mutations, so one store-wide lock is enough.
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<Uuid, SessionState>>,
}

impl SessionStore {
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, SessionState::default());
        id
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionState, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AppError::UnknownSession)
    }

    pub async fn pending_items(&self, id: Uuid) -> Result<Vec<FoodItem>, AppError> {
        Ok(self.get(id).await?.pending_items)
    }

    pub async fn push_item(&self, id: Uuid, item: FoodItem) -> Result<(), AppError> {
        let mut sessions = self.inner.write().await;
        let state = sessions.get_mut(&id).ok_or(AppError::UnknownSession)?;
        state.pending_items.push(item);
        Ok(())
    }

    /// Marks a successful meal submission: the pending list empties exactly
    /// once and the player id sticks for the next render.
    pub async fn finish_meal(&self, id: Uuid, player_id: &str) -> Result<(), AppError> {
        let mut sessions = self.inner.write().await;
        let state = sessions.get_mut(&id).ok_or(AppError::UnknownSession)?;
        state.pending_items.clear();
        state.remembered_player_id = Some(player_id.to_string());
        Ok(())
    }

    pub async fn remember_player(&self, id: Uuid, player_id: &str) -> Result<(), AppError> {
        let mut sessions = self.inner.write().await;
        let state = sessions.get_mut(&id).ok_or(AppError::UnknownSession)?;
        state.remembered_player_id = Some(player_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AmountUnit;

    fn oatmeal() -> FoodItem {
        FoodItem {
            time: "08:00".into(),
            food_product: "oatmeal".into(),
            amount_value: 200.0,
            amount_unit: AmountUnit::Gr,
        }
    }

    #[tokio::test]
    async fn new_sessions_start_empty() {
        let store = SessionStore::default();
        let id = store.create().await;
        let state = store.get(id).await.unwrap();
        assert!(state.pending_items.is_empty());
        assert!(state.remembered_player_id.is_none());
    }

    #[tokio::test]
    async fn unknown_sessions_are_rejected() {
        let store = SessionStore::default();
        let err = store.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::UnknownSession));
        let err = store.push_item(Uuid::new_v4(), oatmeal()).await.unwrap_err();
        assert!(matches!(err, AppError::UnknownSession));
    }

    #[tokio::test]
    async fn items_accumulate_in_order() {
        let store = SessionStore::default();
        let id = store.create().await;
        store.push_item(id, oatmeal()).await.unwrap();
        let mut milk = oatmeal();
        milk.food_product = "milk".into();
        store.push_item(id, milk).await.unwrap();

        let pending = store.pending_items(id).await.unwrap();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].food_product, "oatmeal");
        assert_eq!(pending[1].food_product, "milk");
    }

    #[tokio::test]
    async fn finish_meal_clears_pending_and_remembers_player() {
        let store = SessionStore::default();
        let id = store.create().await;
        store.push_item(id, oatmeal()).await.unwrap();

        store.finish_meal(id, "P1").await.unwrap();

        let state = store.get(id).await.unwrap();
        assert!(state.pending_items.is_empty());
        assert_eq!(state.remembered_player_id.as_deref(), Some("P1"));
    }

    #[tokio::test]
    async fn remember_player_leaves_pending_untouched() {
        let store = SessionStore::default();
        let id = store.create().await;
        store.push_item(id, oatmeal()).await.unwrap();

        store.remember_player(id, "P2").await.unwrap();

        let state = store.get(id).await.unwrap();
        assert_eq!(state.pending_items.len(), 1);
        assert_eq!(state.remembered_player_id.as_deref(), Some("P2"));
    }
}
