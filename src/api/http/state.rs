use std::sync::Arc;

use crate::graph::GraphStore;

pub struct AppState<S: GraphStore> {
    pub store: Arc<S>,
}

impl<S: GraphStore> AppState<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

// Clones share the same store; no Clone bound on S.
impl<S: GraphStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
