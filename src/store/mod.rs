use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod models;
pub mod postgres;

pub use memory::MemoryStore;
pub use models::{Admin, AdminProfile, AboutInfo, Achievement, ContactInfo, Experience, Message, Project, Skill};
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Duplicate(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence seam for everything the API reads and writes. The router only
/// ever sees this trait, so the production Postgres store and the in-memory
/// store used by tests and DATABASE_URL-less development are interchangeable.
///
/// Update and delete operations fail with `StoreError::NotFound` when the
/// identifier does not resolve; lookups return `Ok(None)` instead.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn health(&self) -> Result<(), StoreError>;

    // Administrators
    async fn admin_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError>;
    async fn admin_by_id(&self, id: Uuid) -> Result<Option<Admin>, StoreError>;
    /// Insert, or replace the record with the same username keeping its id.
    async fn upsert_admin(&self, admin: Admin) -> Result<Admin, StoreError>;

    // Projects
    async fn projects(&self) -> Result<Vec<Project>, StoreError>;
    async fn project(&self, id: Uuid) -> Result<Option<Project>, StoreError>;
    async fn insert_project(&self, project: Project) -> Result<Project, StoreError>;
    async fn update_project(&self, project: Project) -> Result<Project, StoreError>;
    async fn delete_project(&self, id: Uuid) -> Result<(), StoreError>;

    // Skills
    async fn skills(&self) -> Result<Vec<Skill>, StoreError>;
    async fn skill(&self, id: Uuid) -> Result<Option<Skill>, StoreError>;
    async fn insert_skill(&self, skill: Skill) -> Result<Skill, StoreError>;
    async fn update_skill(&self, skill: Skill) -> Result<Skill, StoreError>;
    async fn delete_skill(&self, id: Uuid) -> Result<(), StoreError>;

    // Work experience
    async fn experiences(&self) -> Result<Vec<Experience>, StoreError>;
    async fn experience(&self, id: Uuid) -> Result<Option<Experience>, StoreError>;
    async fn insert_experience(&self, experience: Experience) -> Result<Experience, StoreError>;
    async fn update_experience(&self, experience: Experience) -> Result<Experience, StoreError>;
    async fn delete_experience(&self, id: Uuid) -> Result<(), StoreError>;

    // Achievements
    async fn achievements(&self) -> Result<Vec<Achievement>, StoreError>;
    async fn achievement(&self, id: Uuid) -> Result<Option<Achievement>, StoreError>;
    async fn insert_achievement(&self, achievement: Achievement) -> Result<Achievement, StoreError>;
    async fn update_achievement(&self, achievement: Achievement) -> Result<Achievement, StoreError>;
    async fn delete_achievement(&self, id: Uuid) -> Result<(), StoreError>;

    // Contact messages (admin inbox)
    async fn messages(&self) -> Result<Vec<Message>, StoreError>;
    async fn insert_message(&self, message: Message) -> Result<Message, StoreError>;
    async fn mark_message_read(&self, id: Uuid) -> Result<Message, StoreError>;
    async fn delete_message(&self, id: Uuid) -> Result<(), StoreError>;

    // Singletons
    async fn about(&self) -> Result<Option<AboutInfo>, StoreError>;
    async fn put_about(&self, about: AboutInfo) -> Result<AboutInfo, StoreError>;
    async fn contact_info(&self) -> Result<Option<ContactInfo>, StoreError>;
    async fn put_contact_info(&self, info: ContactInfo) -> Result<ContactInfo, StoreError>;
}
