//! Bolt-backed graph store
//!
//! One Cypher statement per operation, executed over a pooled connection to
//! a Neo4j-compatible server. Task creation and person assignment run inside
//! a single explicit transaction so a failure between the two statements
//! cannot leave an orphaned Task node.

use async_trait::async_trait;
use log::debug;
use neo4rs::{query, Graph, Node};

use crate::config::Config;
use crate::graph::error::{GraphError, GraphResult};
use crate::graph::types::{Person, PersonProps, Task, TaskProps};
use crate::graph::GraphStore;

pub struct BoltStore {
    graph: Graph,
}

impl BoltStore {
    /// Connect to the graph server configured in `config`. The driver keeps
    /// a pool of `max_connections` bolt connections; each statement checks
    /// one out for its duration.
    pub async fn connect(config: &Config) -> GraphResult<Self> {
        let bolt_config = neo4rs::ConfigBuilder::default()
            .uri(config.bolt_uri.as_str())
            .user(config.bolt_user.as_str())
            .password(config.bolt_password.as_str())
            .max_connections(config.max_connections)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(bolt_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        Ok(Self { graph })
    }

    /// Round-trip connectivity check.
    pub async fn ping(&self) -> GraphResult<()> {
        let mut stream = self
            .graph
            .execute(query("RETURN 1 AS ok"))
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;
        while stream.next().await?.is_some() {}
        Ok(())
    }
}

fn person_props(node: &Node) -> GraphResult<PersonProps> {
    Ok(PersonProps {
        name: node.get("name")?,
        age: node.get("age")?,
    })
}

fn task_props(node: &Node) -> GraphResult<TaskProps> {
    Ok(TaskProps {
        name: node.get("name")?,
        description: node.get("description")?,
    })
}

#[async_trait]
impl GraphStore for BoltStore {
    async fn create_person(&self, name: &str, age: i64) -> GraphResult<PersonProps> {
        let q = query("CREATE (n:Person {name: $name, age: $age}) RETURN n")
            .param("name", name)
            .param("age", age);

        let mut stream = self.graph.execute(q).await?;
        let mut created = None;
        while let Some(row) = stream.next().await? {
            if created.is_none() {
                let node: Node = row.get("n")?;
                created = Some(person_props(&node)?);
            }
        }
        created.ok_or_else(|| GraphError::MalformedRecord("CREATE returned no record".to_string()))
    }

    async fn list_persons(&self) -> GraphResult<Vec<Person>> {
        let q = query("MATCH (n:Person) RETURN id(n) AS id, n");

        let mut stream = self.graph.execute(q).await?;
        let mut persons = Vec::new();
        while let Some(row) = stream.next().await? {
            let id: i64 = row.get("id")?;
            let node: Node = row.get("n")?;
            let props = person_props(&node)?;
            persons.push(Person {
                id,
                name: props.name,
                age: props.age,
            });
        }
        Ok(persons)
    }

    async fn person_by_id(&self, id: i64) -> GraphResult<Option<PersonProps>> {
        let q = query("MATCH (n:Person) WHERE id(n) = $id RETURN n").param("id", id);

        let mut stream = self.graph.execute(q).await?;
        let mut found = None;
        while let Some(row) = stream.next().await? {
            if found.is_none() {
                let node: Node = row.get("n")?;
                found = Some(person_props(&node)?);
            }
        }
        Ok(found)
    }

    async fn update_person(
        &self,
        id: i64,
        name: &str,
        age: i64,
    ) -> GraphResult<Option<PersonProps>> {
        let q = query("MATCH (n:Person) WHERE id(n) = $id SET n.name = $name, n.age = $age RETURN n")
            .param("id", id)
            .param("name", name)
            .param("age", age);

        let mut stream = self.graph.execute(q).await?;
        let mut updated = None;
        while let Some(row) = stream.next().await? {
            if updated.is_none() {
                let node: Node = row.get("n")?;
                updated = Some(person_props(&node)?);
            }
        }
        Ok(updated)
    }

    async fn delete_person(&self, id: i64) -> GraphResult<()> {
        let q = query("MATCH (n:Person) WHERE id(n) = $id DETACH DELETE n").param("id", id);
        self.graph.run(q).await?;
        Ok(())
    }

    async fn create_task(
        &self,
        name: &str,
        description: &str,
        person_ids: &[i64],
    ) -> GraphResult<TaskProps> {
        let mut txn = self
            .graph
            .start_txn()
            .await
            .map_err(|e| GraphError::Transaction(e.to_string()))?;

        let create_q = query("CREATE (t:Task {name: $name, description: $description}) RETURN id(t) AS id, t")
            .param("name", name)
            .param("description", description);

        let mut stream = txn
            .execute(create_q)
            .await
            .map_err(|e| GraphError::Transaction(e.to_string()))?;

        let mut task_id = None;
        let mut created = None;
        while let Some(row) = stream
            .next(txn.handle())
            .await
            .map_err(|e| GraphError::Transaction(e.to_string()))?
        {
            if created.is_none() {
                let id: i64 = row.get("id")?;
                let node: Node = row.get("t")?;
                task_id = Some(id);
                created = Some(task_props(&node)?);
            }
        }
        drop(stream);

        let (task_id, created) = match (task_id, created) {
            (Some(id), Some(props)) => (id, props),
            _ => {
                return Err(GraphError::MalformedRecord(
                    "CREATE returned no record".to_string(),
                ))
            }
        };

        // Unmatched person ids fall out of the MATCH; no edge, no error.
        if !person_ids.is_empty() {
            let assign_q = query(
                "MATCH (t:Task), (p:Person) \
                 WHERE id(t) = $task_id AND id(p) IN $person_ids \
                 CREATE (p)-[:ASSIGNED_TO]->(t)",
            )
            .param("task_id", task_id)
            .param("person_ids", person_ids.to_vec());

            txn.run(assign_q)
                .await
                .map_err(|e| GraphError::Transaction(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| GraphError::Transaction(e.to_string()))?;

        debug!(
            "created task {} with {} assignment candidate(s)",
            task_id,
            person_ids.len()
        );
        Ok(created)
    }

    async fn list_tasks(&self) -> GraphResult<Vec<Task>> {
        let q = query("MATCH (t:Task) RETURN id(t) AS id, t");

        let mut stream = self.graph.execute(q).await?;
        let mut tasks = Vec::new();
        while let Some(row) = stream.next().await? {
            let id: i64 = row.get("id")?;
            let node: Node = row.get("t")?;
            let props = task_props(&node)?;
            tasks.push(Task {
                id,
                name: props.name,
                description: props.description,
            });
        }
        Ok(tasks)
    }

    async fn task_by_id(&self, id: i64) -> GraphResult<Option<TaskProps>> {
        let q = query("MATCH (t:Task) WHERE id(t) = $id RETURN t").param("id", id);

        let mut stream = self.graph.execute(q).await?;
        let mut found = None;
        while let Some(row) = stream.next().await? {
            if found.is_none() {
                let node: Node = row.get("t")?;
                found = Some(task_props(&node)?);
            }
        }
        Ok(found)
    }

    async fn update_task(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> GraphResult<Option<TaskProps>> {
        let q = query(
            "MATCH (t:Task) WHERE id(t) = $id \
             SET t.name = $name, t.description = $description RETURN t",
        )
        .param("id", id)
        .param("name", name)
        .param("description", description);

        let mut stream = self.graph.execute(q).await?;
        let mut updated = None;
        while let Some(row) = stream.next().await? {
            if updated.is_none() {
                let node: Node = row.get("t")?;
                updated = Some(task_props(&node)?);
            }
        }
        Ok(updated)
    }

    async fn delete_task(&self, id: i64) -> GraphResult<()> {
        let q = query("MATCH (t:Task) WHERE id(t) = $id DETACH DELETE t").param("id", id);
        self.graph.run(q).await?;
        Ok(())
    }
}
