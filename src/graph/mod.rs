//! Graph store layer
//!
//! Defines the [`GraphStore`] trait the HTTP handlers are generic over, plus
//! the bolt-backed production implementation.

pub mod error;
pub mod store;
pub mod types;

pub use error::{GraphError, GraphResult};
pub use store::BoltStore;
pub use types::{Person, PersonProps, Task, TaskProps};

use async_trait::async_trait;

/// Operations the resource handlers need from the backing graph database.
///
/// One implementation talks bolt to a real server ([`BoltStore`]); tests
/// substitute an in-memory store.
#[async_trait]
pub trait GraphStore: Send + Sync + 'static {
    async fn create_person(&self, name: &str, age: i64) -> GraphResult<PersonProps>;

    /// All Person nodes, each with its internal node identity.
    async fn list_persons(&self) -> GraphResult<Vec<Person>>;

    /// Properties of the Person with the given identity, or `None` when no
    /// node matches.
    async fn person_by_id(&self, id: i64) -> GraphResult<Option<PersonProps>>;

    /// Overwrites both fields. Returns the updated properties, or `None`
    /// when no node matches.
    async fn update_person(&self, id: i64, name: &str, age: i64) -> GraphResult<Option<PersonProps>>;

    /// Detach-deletes the node and its incident relationships. Succeeds
    /// whether or not the node existed.
    async fn delete_person(&self, id: i64) -> GraphResult<()>;

    /// Creates the Task node and an ASSIGNED_TO edge from every Person in
    /// `person_ids` that exists, in a single transaction. Ids that match no
    /// Person are skipped.
    async fn create_task(
        &self,
        name: &str,
        description: &str,
        person_ids: &[i64],
    ) -> GraphResult<TaskProps>;

    async fn list_tasks(&self) -> GraphResult<Vec<Task>>;

    async fn task_by_id(&self, id: i64) -> GraphResult<Option<TaskProps>>;

    async fn update_task(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> GraphResult<Option<TaskProps>>;

    async fn delete_task(&self, id: i64) -> GraphResult<()>;
}
