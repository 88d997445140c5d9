use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{AboutInfo, Achievement, Admin, ContactInfo, Experience, Message, Project, Skill};
use super::{PortfolioStore, StoreError};

/// In-memory store backing the test suite and DATABASE_URL-less development
/// runs. Ordering of list results matches the Postgres store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    admins: Vec<Admin>,
    projects: Vec<Project>,
    skills: Vec<Skill>,
    experiences: Vec<Experience>,
    achievements: Vec<Achievement>,
    messages: Vec<Message>,
    about: Option<AboutInfo>,
    contact: Option<ContactInfo>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn health(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn admin_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.admins.iter().find(|a| a.username == username).cloned())
    }

    async fn admin_by_id(&self, id: Uuid) -> Result<Option<Admin>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.admins.iter().find(|a| a.id == id).cloned())
    }

    async fn upsert_admin(&self, mut admin: Admin) -> Result<Admin, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.admins.iter_mut().find(|a| a.username == admin.username) {
            // Keep the original identity, as the unique-username upsert does
            admin.id = existing.id;
            admin.created_at = existing.created_at;
            *existing = admin.clone();
            return Ok(admin);
        }
        inner.admins.push(admin.clone());
        Ok(admin)
    }

    async fn projects(&self) -> Result<Vec<Project>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows = inner.projects.clone();
        rows.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_project(&self, project: Project) -> Result<Project, StoreError> {
        let mut inner = self.inner.write().await;
        inner.projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, project: Project) -> Result<Project, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => {
                *existing = project.clone();
                Ok(project)
            }
            None => Err(StoreError::NotFound("project not found".to_string())),
        }
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.projects.len();
        inner.projects.retain(|p| p.id != id);
        if inner.projects.len() == before {
            return Err(StoreError::NotFound("project not found".to_string()));
        }
        Ok(())
    }

    async fn skills(&self) -> Result<Vec<Skill>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows = inner.skills.clone();
        rows.sort_by(|a, b| a.category.cmp(&b.category).then(a.name.cmp(&b.name)));
        Ok(rows)
    }

    async fn skill(&self, id: Uuid) -> Result<Option<Skill>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.skills.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_skill(&self, skill: Skill) -> Result<Skill, StoreError> {
        let mut inner = self.inner.write().await;
        inner.skills.push(skill.clone());
        Ok(skill)
    }

    async fn update_skill(&self, skill: Skill) -> Result<Skill, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.skills.iter_mut().find(|s| s.id == skill.id) {
            Some(existing) => {
                *existing = skill.clone();
                Ok(skill)
            }
            None => Err(StoreError::NotFound("skill not found".to_string())),
        }
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.skills.len();
        inner.skills.retain(|s| s.id != id);
        if inner.skills.len() == before {
            return Err(StoreError::NotFound("skill not found".to_string()));
        }
        Ok(())
    }

    async fn experiences(&self) -> Result<Vec<Experience>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows = inner.experiences.clone();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(rows)
    }

    async fn experience(&self, id: Uuid) -> Result<Option<Experience>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.experiences.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_experience(&self, experience: Experience) -> Result<Experience, StoreError> {
        let mut inner = self.inner.write().await;
        inner.experiences.push(experience.clone());
        Ok(experience)
    }

    async fn update_experience(&self, experience: Experience) -> Result<Experience, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.experiences.iter_mut().find(|e| e.id == experience.id) {
            Some(existing) => {
                *existing = experience.clone();
                Ok(experience)
            }
            None => Err(StoreError::NotFound("experience entry not found".to_string())),
        }
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.experiences.len();
        inner.experiences.retain(|e| e.id != id);
        if inner.experiences.len() == before {
            return Err(StoreError::NotFound("experience entry not found".to_string()));
        }
        Ok(())
    }

    async fn achievements(&self) -> Result<Vec<Achievement>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows = inner.achievements.clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn achievement(&self, id: Uuid) -> Result<Option<Achievement>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.achievements.iter().find(|a| a.id == id).cloned())
    }

    async fn insert_achievement(&self, achievement: Achievement) -> Result<Achievement, StoreError> {
        let mut inner = self.inner.write().await;
        inner.achievements.push(achievement.clone());
        Ok(achievement)
    }

    async fn update_achievement(&self, achievement: Achievement) -> Result<Achievement, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.achievements.iter_mut().find(|a| a.id == achievement.id) {
            Some(existing) => {
                *existing = achievement.clone();
                Ok(achievement)
            }
            None => Err(StoreError::NotFound("achievement not found".to_string())),
        }
    }

    async fn delete_achievement(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.achievements.len();
        inner.achievements.retain(|a| a.id != id);
        if inner.achievements.len() == before {
            return Err(StoreError::NotFound("achievement not found".to_string()));
        }
        Ok(())
    }

    async fn messages(&self) -> Result<Vec<Message>, StoreError> {
        let inner = self.inner.read().await;
        let mut rows = inner.messages.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert_message(&self, message: Message) -> Result<Message, StoreError> {
        let mut inner = self.inner.write().await;
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn mark_message_read(&self, id: Uuid) -> Result<Message, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.read = true;
                Ok(message.clone())
            }
            None => Err(StoreError::NotFound("message not found".to_string())),
        }
    }

    async fn delete_message(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.messages.len();
        inner.messages.retain(|m| m.id != id);
        if inner.messages.len() == before {
            return Err(StoreError::NotFound("message not found".to_string()));
        }
        Ok(())
    }

    async fn about(&self) -> Result<Option<AboutInfo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.about.clone())
    }

    async fn put_about(&self, about: AboutInfo) -> Result<AboutInfo, StoreError> {
        let mut inner = self.inner.write().await;
        inner.about = Some(about.clone());
        Ok(about)
    }

    async fn contact_info(&self) -> Result<Option<ContactInfo>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.contact.clone())
    }

    async fn put_contact_info(&self, info: ContactInfo) -> Result<ContactInfo, StoreError> {
        let mut inner = self.inner.write().await;
        inner.contact = Some(info.clone());
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            proficiency: 80,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn admin_upsert_keeps_identity_across_credential_changes() {
        let store = MemoryStore::new();
        let first = store
            .upsert_admin(Admin::new("admin", "a@example.com", "hash-one".into(), None))
            .await
            .expect("insert");

        let second = store
            .upsert_admin(Admin::new(
                "admin",
                "b@example.com",
                "hash-two".into(),
                Some("octocat".into()),
            ))
            .await
            .expect("update");

        assert_eq!(first.id, second.id);
        assert_eq!(second.password_hash, "hash-two");
        assert_eq!(
            store.admin_by_id(first.id).await.expect("lookup").map(|a| a.email),
            Some("b@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn skill_update_and_delete_miss_with_not_found() {
        let store = MemoryStore::new();
        let ghost = skill("Rust", "Languages");

        assert!(matches!(
            store.update_skill(ghost.clone()).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_skill(ghost.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn skills_list_orders_by_category_then_name() {
        let store = MemoryStore::new();
        store.insert_skill(skill("Svelte", "Frontend")).await.expect("insert");
        store.insert_skill(skill("Axum", "Backend")).await.expect("insert");
        store.insert_skill(skill("Rust", "Backend")).await.expect("insert");

        let names: Vec<String> = store
            .skills()
            .await
            .expect("list")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Axum", "Rust", "Svelte"]);
    }

    #[tokio::test]
    async fn message_read_flag_and_delete() {
        let store = MemoryStore::new();
        let message = store
            .insert_message(Message {
                id: Uuid::new_v4(),
                name: "Visitor".into(),
                email: "visitor@example.com".into(),
                subject: None,
                body: "Hello".into(),
                read: false,
                created_at: Utc::now(),
            })
            .await
            .expect("insert");

        let read = store.mark_message_read(message.id).await.expect("mark read");
        assert!(read.read);

        store.delete_message(message.id).await.expect("delete");
        assert!(store.messages().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn about_singleton_upserts() {
        let store = MemoryStore::new();
        assert!(store.about().await.expect("get").is_none());

        let about = AboutInfo {
            headline: "Engineer".into(),
            bio: "I build things".into(),
            avatar_url: None,
            resume_url: None,
            updated_at: Utc::now(),
        };
        store.put_about(about.clone()).await.expect("put");
        store
            .put_about(AboutInfo {
                headline: "Senior Engineer".into(),
                ..about
            })
            .await
            .expect("put again");

        let stored = store.about().await.expect("get").expect("present");
        assert_eq!(stored.headline, "Senior Engineer");
    }
}
