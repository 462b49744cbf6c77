use tracing::error;

use crate::client::api::InventoryBackend;
use crate::client::state::{reduce, Action, ClientState};
use crate::types::item::Item;

/// Drives a [`ClientState`] from user intents and backend results.
///
/// Every successful mutation is followed by a full re-fetch; the local list is
/// never patched in place.
pub struct InventoryApp<B> {
    backend: B,
    state: ClientState,
}

impl<B: InventoryBackend> InventoryApp<B> {
    pub fn new(backend: B) -> Self {
        InventoryApp {
            backend,
            state: ClientState::default(),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }

    pub async fn load(&mut self) {
        self.dispatch(Action::FetchStarted);
        match self.backend.list_items().await {
            Ok(items) => self.dispatch(Action::FetchSucceeded(items)),
            Err(e) => {
                error!(error = %e, "failed to fetch inventory");
                self.dispatch(Action::FetchFailed);
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.dispatch(Action::NameChanged(name.into()));
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.dispatch(Action::QuantityChanged(quantity.into()));
    }

    /// Creates or updates depending on whether an item is being edited.
    pub async fn submit(&mut self) {
        let body = self.state.form.to_body();
        let result = match self.state.editing.as_deref() {
            Some(id) => self.backend.update_item(id, &body).await.map(|_| ()),
            None => self.backend.create_item(&body).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.dispatch(Action::SubmitSucceeded);
                self.load().await;
            }
            Err(e) => {
                error!(error = %e, "failed to save item");
                self.dispatch(Action::SubmitFailed);
            }
        }
    }

    pub fn edit(&mut self, item: Item) {
        self.dispatch(Action::EditRequested(item));
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(Action::EditCancelled);
    }

    /// Nothing is sent unless `confirm` returns true.
    pub async fn delete<F>(&mut self, id: &str, confirm: F)
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return;
        }

        match self.backend.delete_item(id).await {
            Ok(()) => self.load().await,
            Err(e) => {
                error!(error = %e, id, "failed to delete item");
                self.dispatch(Action::DeleteFailed);
            }
        }
    }
}
