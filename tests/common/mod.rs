//! Test doubles for the graph store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use taskgraph::graph::{
    GraphError, GraphResult, GraphStore, Person, PersonProps, Task, TaskProps,
};

/// In-memory stand-in for the bolt store. Mirrors the semantics of the
/// Cypher statements: detach-delete drops incident assignments, and task
/// creation silently skips person ids that match no node.
#[derive(Default)]
pub struct MockStore {
    persons: Mutex<HashMap<i64, PersonProps>>,
    tasks: Mutex<HashMap<i64, TaskProps>>,
    /// (person id, task id) pairs standing in for ASSIGNED_TO edges.
    assignments: Mutex<Vec<(i64, i64)>>,
    next_id: AtomicI64,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.lock().unwrap().len()
    }

    pub fn persons_assigned_to(&self, task_id: i64) -> Vec<i64> {
        self.assignments
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, t)| *t == task_id)
            .map(|(p, _)| *p)
            .collect()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }
}

#[async_trait]
impl GraphStore for MockStore {
    async fn create_person(&self, name: &str, age: i64) -> GraphResult<PersonProps> {
        let props = PersonProps {
            name: name.to_string(),
            age,
        };
        self.persons
            .lock()
            .unwrap()
            .insert(self.next_id(), props.clone());
        Ok(props)
    }

    async fn list_persons(&self) -> GraphResult<Vec<Person>> {
        let mut persons: Vec<Person> = self
            .persons
            .lock()
            .unwrap()
            .iter()
            .map(|(id, p)| Person {
                id: *id,
                name: p.name.clone(),
                age: p.age,
            })
            .collect();
        persons.sort_by_key(|p| p.id);
        Ok(persons)
    }

    async fn person_by_id(&self, id: i64) -> GraphResult<Option<PersonProps>> {
        Ok(self.persons.lock().unwrap().get(&id).cloned())
    }

    async fn update_person(
        &self,
        id: i64,
        name: &str,
        age: i64,
    ) -> GraphResult<Option<PersonProps>> {
        let mut persons = self.persons.lock().unwrap();
        match persons.get_mut(&id) {
            Some(props) => {
                props.name = name.to_string();
                props.age = age;
                Ok(Some(props.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_person(&self, id: i64) -> GraphResult<()> {
        self.persons.lock().unwrap().remove(&id);
        self.assignments.lock().unwrap().retain(|(p, _)| *p != id);
        Ok(())
    }

    async fn create_task(
        &self,
        name: &str,
        description: &str,
        person_ids: &[i64],
    ) -> GraphResult<TaskProps> {
        let props = TaskProps {
            name: name.to_string(),
            description: description.to_string(),
        };
        let task_id = self.next_id();
        self.tasks.lock().unwrap().insert(task_id, props.clone());

        let persons = self.persons.lock().unwrap();
        let mut assignments = self.assignments.lock().unwrap();
        for person_id in person_ids {
            if persons.contains_key(person_id) {
                assignments.push((*person_id, task_id));
            }
        }
        Ok(props)
    }

    async fn list_tasks(&self) -> GraphResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .map(|(id, t)| Task {
                id: *id,
                name: t.name.clone(),
                description: t.description.clone(),
            })
            .collect();
        tasks.sort_by_key(|t| t.id);
        Ok(tasks)
    }

    async fn task_by_id(&self, id: i64) -> GraphResult<Option<TaskProps>> {
        Ok(self.tasks.lock().unwrap().get(&id).cloned())
    }

    async fn update_task(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> GraphResult<Option<TaskProps>> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.get_mut(&id) {
            Some(props) => {
                props.name = name.to_string();
                props.description = description.to_string();
                Ok(Some(props.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_task(&self, id: i64) -> GraphResult<()> {
        self.tasks.lock().unwrap().remove(&id);
        self.assignments.lock().unwrap().retain(|(_, t)| *t != id);
        Ok(())
    }
}

/// Store whose every operation fails, for exercising the error path.
pub struct FailingStore;

fn refused<T>() -> GraphResult<T> {
    Err(GraphError::Connection("connection refused".to_string()))
}

#[async_trait]
impl GraphStore for FailingStore {
    async fn create_person(&self, _name: &str, _age: i64) -> GraphResult<PersonProps> {
        refused()
    }

    async fn list_persons(&self) -> GraphResult<Vec<Person>> {
        refused()
    }

    async fn person_by_id(&self, _id: i64) -> GraphResult<Option<PersonProps>> {
        refused()
    }

    async fn update_person(
        &self,
        _id: i64,
        _name: &str,
        _age: i64,
    ) -> GraphResult<Option<PersonProps>> {
        refused()
    }

    async fn delete_person(&self, _id: i64) -> GraphResult<()> {
        refused()
    }

    async fn create_task(
        &self,
        _name: &str,
        _description: &str,
        _person_ids: &[i64],
    ) -> GraphResult<TaskProps> {
        refused()
    }

    async fn list_tasks(&self) -> GraphResult<Vec<Task>> {
        refused()
    }

    async fn task_by_id(&self, _id: i64) -> GraphResult<Option<TaskProps>> {
        refused()
    }

    async fn update_task(
        &self,
        _id: i64,
        _name: &str,
        _description: &str,
    ) -> GraphResult<Option<TaskProps>> {
        refused()
    }

    async fn delete_task(&self, _id: i64) -> GraphResult<()> {
        refused()
    }
}
