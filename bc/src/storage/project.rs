//! Project persistence
//!
//! Projects serialize directly; their record shape has been stable since
//! plans were added as an optional field.

use async_trait::async_trait;
use docstore::{Store, now_ms};
use tracing::debug;

use crate::domain::Project;
use crate::error::Result;

/// Durable storage for projects
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist a brand-new project; fails if the id is taken
    async fn create(&self, project: &Project) -> Result<()>;

    /// Load a project by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>>;

    /// Persist the full current state of a project
    async fn save(&self, project: &Project) -> Result<()>;

    /// Delete a project by id
    async fn delete(&self, id: &str) -> Result<()>;

    /// All projects owned by a user, newest-first
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Project>>;
}

/// Docstore-backed project repository
pub struct DocProjectRepository {
    store: Store,
}

impl DocProjectRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepository for DocProjectRepository {
    async fn create(&self, project: &Project) -> Result<()> {
        debug!(project_id = %project.id, "create: called");
        self.store.create(project)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>> {
        debug!(project_id = %id, "find_by_id: called");
        Ok(self.store.get(id)?)
    }

    async fn save(&self, project: &Project) -> Result<()> {
        debug!(project_id = %project.id, "save: called");
        let mut project = project.clone();
        project.updated_at = now_ms();
        self.store.save(&project)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        debug!(project_id = %id, "delete: called");
        self.store.delete::<Project>(id)?;
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Project>> {
        debug!(%user_id, "list_for_user: called");
        let all: Vec<Project> = self.store.list()?;
        Ok(all.into_iter().filter(|p| p.user_id == user_id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_find_round_trip() {
        let dir = TempDir::new().unwrap();
        let repo = DocProjectRepository::new(Store::open(dir.path()).unwrap());

        let project = Project::new("user-1", "Studio site");
        repo.create(&project).await.unwrap();

        let loaded = repo.find_by_id(&project.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Studio site");
        assert_eq!(loaded.user_id, "user-1");
    }

    #[tokio::test]
    async fn test_list_for_user_filters_and_orders() {
        let dir = TempDir::new().unwrap();
        let repo = DocProjectRepository::new(Store::open(dir.path()).unwrap());

        let mut first = Project::new("user-1", "First");
        first.updated_at = 100;
        let mut second = Project::new("user-1", "Second");
        second.updated_at = 200;
        let other = Project::new("user-2", "Theirs");

        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();
        repo.create(&other).await.unwrap();

        let mine = repo.list_for_user("user-1").await.unwrap();
        let names: Vec<&str> = mine.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = TempDir::new().unwrap();
        let repo = DocProjectRepository::new(Store::open(dir.path()).unwrap());

        let project = Project::new("user-1", "Short-lived");
        repo.create(&project).await.unwrap();
        repo.delete(&project.id).await.unwrap();

        assert!(repo.find_by_id(&project.id).await.unwrap().is_none());
    }
}
