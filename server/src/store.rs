//! In-memory todo store.
//!
//! # Design
//! `TodoStore` is an ordinary owned value: the HTTP layer wraps it in
//! `SharedStore` and hands it to handlers through `AppState`, so every
//! router (and every test) gets its own store.
//!
//! Identifiers come from a counter that starts at 1 and only moves forward.
//! Deleting a record never rewinds it, so an id is never issued twice within
//! the lifetime of a store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A single todo record as stored and as serialized on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub text: String,
    #[serde(serialize_with = "crate::time::serialize")]
    pub created_at: DateTime<Utc>,
}

/// Store shared between request handlers. Writers hold the lock for the
/// whole insert or delete.
pub type SharedStore = Arc<RwLock<TodoStore>>;

#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Append a todo. `text` must already be trimmed and non-empty.
    pub fn insert(&mut self, text: String) -> Todo {
        debug_assert!(!text.trim().is_empty(), "insert called with blank text");

        let todo = Todo {
            id: self.next_id,
            text,
            created_at: crate::time::now(),
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Snapshot of all todos in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Remove the todo with `id`. Returns `false` when no such todo exists.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.todos.iter().position(|todo| todo.id == id) {
            Some(index) => {
                // `remove` rather than `swap_remove`: survivors keep their order.
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// The id the next `insert` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
