use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use super::models::{AboutInfo, Achievement, Admin, ContactInfo, Experience, Message, Project, Skill};
use super::{PortfolioStore, StoreError};

/// Postgres-backed store. Queries are bound at runtime so the crate builds
/// without a live database.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

// Applied in order at startup; every statement is idempotent.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS administrators (
        id UUID PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        github_username TEXT,
        created_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS projects (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        technologies TEXT[] NOT NULL DEFAULT '{}',
        image_url TEXT,
        github_url TEXT,
        live_url TEXT,
        featured BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS skills (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        proficiency INT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS experience (
        id UUID PRIMARY KEY,
        role TEXT NOT NULL,
        company TEXT NOT NULL,
        location TEXT,
        start_date DATE NOT NULL,
        end_date DATE,
        summary TEXT NOT NULL,
        technologies TEXT[] NOT NULL DEFAULT '{}',
        created_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS achievements (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        \"date\" DATE NOT NULL,
        link TEXT,
        created_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS messages (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        subject TEXT,
        body TEXT NOT NULL,
        read BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS about_info (
        id SMALLINT PRIMARY KEY CHECK (id = 1),
        headline TEXT NOT NULL,
        bio TEXT NOT NULL,
        avatar_url TEXT,
        resume_url TEXT,
        updated_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS contact_info (
        id SMALLINT PRIMARY KEY CHECK (id = 1),
        email TEXT NOT NULL,
        phone TEXT,
        location TEXT,
        socials JSONB NOT NULL DEFAULT '{}',
        updated_at TIMESTAMPTZ NOT NULL
    )",
];

impl PgStore {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        for ddl in SCHEMA {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioStore for PgStore {
    async fn health(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn admin_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, email, password_hash, github_username, created_at
             FROM administrators WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    async fn admin_by_id(&self, id: Uuid) -> Result<Option<Admin>, StoreError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, email, password_hash, github_username, created_at
             FROM administrators WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(admin)
    }

    async fn upsert_admin(&self, admin: Admin) -> Result<Admin, StoreError> {
        let stored = sqlx::query_as::<_, Admin>(
            "INSERT INTO administrators (id, username, email, password_hash, github_username, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (username) DO UPDATE SET
                email = EXCLUDED.email,
                password_hash = EXCLUDED.password_hash,
                github_username = EXCLUDED.github_username
             RETURNING id, username, email, password_hash, github_username, created_at",
        )
        .bind(admin.id)
        .bind(&admin.username)
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(&admin.github_username)
        .bind(admin.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn projects(&self) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query_as::<_, Project>(
            "SELECT id, title, description, technologies, image_url, github_url, live_url,
                    featured, created_at, updated_at
             FROM projects ORDER BY featured DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn project(&self, id: Uuid) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, Project>(
            "SELECT id, title, description, technologies, image_url, github_url, live_url,
                    featured, created_at, updated_at
             FROM projects WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_project(&self, project: Project) -> Result<Project, StoreError> {
        sqlx::query(
            "INSERT INTO projects (id, title, description, technologies, image_url, github_url,
                                   live_url, featured, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.technologies)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(project.featured)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(project)
    }

    async fn update_project(&self, project: Project) -> Result<Project, StoreError> {
        let updated = sqlx::query_as::<_, Project>(
            "UPDATE projects SET title = $2, description = $3, technologies = $4, image_url = $5,
                    github_url = $6, live_url = $7, featured = $8, updated_at = $9
             WHERE id = $1
             RETURNING id, title, description, technologies, image_url, github_url, live_url,
                       featured, created_at, updated_at",
        )
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.technologies)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(project.featured)
        .bind(project.updated_at)
        .fetch_optional(&self.pool)
        .await?;
        updated.ok_or_else(|| StoreError::NotFound("project not found".to_string()))
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("project not found".to_string()));
        }
        Ok(())
    }

    async fn skills(&self) -> Result<Vec<Skill>, StoreError> {
        let rows = sqlx::query_as::<_, Skill>(
            "SELECT id, name, category, proficiency, created_at
             FROM skills ORDER BY category, name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn skill(&self, id: Uuid) -> Result<Option<Skill>, StoreError> {
        let row = sqlx::query_as::<_, Skill>(
            "SELECT id, name, category, proficiency, created_at FROM skills WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_skill(&self, skill: Skill) -> Result<Skill, StoreError> {
        sqlx::query(
            "INSERT INTO skills (id, name, category, proficiency, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(skill.id)
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.proficiency)
        .bind(skill.created_at)
        .execute(&self.pool)
        .await?;
        Ok(skill)
    }

    async fn update_skill(&self, skill: Skill) -> Result<Skill, StoreError> {
        let updated = sqlx::query_as::<_, Skill>(
            "UPDATE skills SET name = $2, category = $3, proficiency = $4
             WHERE id = $1
             RETURNING id, name, category, proficiency, created_at",
        )
        .bind(skill.id)
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.proficiency)
        .fetch_optional(&self.pool)
        .await?;
        updated.ok_or_else(|| StoreError::NotFound("skill not found".to_string()))
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("skill not found".to_string()));
        }
        Ok(())
    }

    async fn experiences(&self) -> Result<Vec<Experience>, StoreError> {
        let rows = sqlx::query_as::<_, Experience>(
            "SELECT id, role, company, location, start_date, end_date, summary, technologies, created_at
             FROM experience ORDER BY start_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn experience(&self, id: Uuid) -> Result<Option<Experience>, StoreError> {
        let row = sqlx::query_as::<_, Experience>(
            "SELECT id, role, company, location, start_date, end_date, summary, technologies, created_at
             FROM experience WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_experience(&self, experience: Experience) -> Result<Experience, StoreError> {
        sqlx::query(
            "INSERT INTO experience (id, role, company, location, start_date, end_date, summary,
                                     technologies, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(experience.id)
        .bind(&experience.role)
        .bind(&experience.company)
        .bind(&experience.location)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(&experience.summary)
        .bind(&experience.technologies)
        .bind(experience.created_at)
        .execute(&self.pool)
        .await?;
        Ok(experience)
    }

    async fn update_experience(&self, experience: Experience) -> Result<Experience, StoreError> {
        let updated = sqlx::query_as::<_, Experience>(
            "UPDATE experience SET role = $2, company = $3, location = $4, start_date = $5,
                    end_date = $6, summary = $7, technologies = $8
             WHERE id = $1
             RETURNING id, role, company, location, start_date, end_date, summary, technologies, created_at",
        )
        .bind(experience.id)
        .bind(&experience.role)
        .bind(&experience.company)
        .bind(&experience.location)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(&experience.summary)
        .bind(&experience.technologies)
        .fetch_optional(&self.pool)
        .await?;
        updated.ok_or_else(|| StoreError::NotFound("experience entry not found".to_string()))
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM experience WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("experience entry not found".to_string()));
        }
        Ok(())
    }

    async fn achievements(&self) -> Result<Vec<Achievement>, StoreError> {
        let rows = sqlx::query_as::<_, Achievement>(
            "SELECT id, title, description, \"date\", link, created_at
             FROM achievements ORDER BY \"date\" DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn achievement(&self, id: Uuid) -> Result<Option<Achievement>, StoreError> {
        let row = sqlx::query_as::<_, Achievement>(
            "SELECT id, title, description, \"date\", link, created_at
             FROM achievements WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_achievement(&self, achievement: Achievement) -> Result<Achievement, StoreError> {
        sqlx::query(
            "INSERT INTO achievements (id, title, description, \"date\", link, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(achievement.id)
        .bind(&achievement.title)
        .bind(&achievement.description)
        .bind(achievement.date)
        .bind(&achievement.link)
        .bind(achievement.created_at)
        .execute(&self.pool)
        .await?;
        Ok(achievement)
    }

    async fn update_achievement(&self, achievement: Achievement) -> Result<Achievement, StoreError> {
        let updated = sqlx::query_as::<_, Achievement>(
            "UPDATE achievements SET title = $2, description = $3, \"date\" = $4, link = $5
             WHERE id = $1
             RETURNING id, title, description, \"date\", link, created_at",
        )
        .bind(achievement.id)
        .bind(&achievement.title)
        .bind(&achievement.description)
        .bind(achievement.date)
        .bind(&achievement.link)
        .fetch_optional(&self.pool)
        .await?;
        updated.ok_or_else(|| StoreError::NotFound("achievement not found".to_string()))
    }

    async fn delete_achievement(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("achievement not found".to_string()));
        }
        Ok(())
    }

    async fn messages(&self) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query_as::<_, Message>(
            "SELECT id, name, email, subject, body, read, created_at
             FROM messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_message(&self, message: Message) -> Result<Message, StoreError> {
        sqlx::query(
            "INSERT INTO messages (id, name, email, subject, body, read, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.body)
        .bind(message.read)
        .bind(message.created_at)
        .execute(&self.pool)
        .await?;
        Ok(message)
    }

    async fn mark_message_read(&self, id: Uuid) -> Result<Message, StoreError> {
        let updated = sqlx::query_as::<_, Message>(
            "UPDATE messages SET read = TRUE WHERE id = $1
             RETURNING id, name, email, subject, body, read, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        updated.ok_or_else(|| StoreError::NotFound("message not found".to_string()))
    }

    async fn delete_message(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("message not found".to_string()));
        }
        Ok(())
    }

    async fn about(&self) -> Result<Option<AboutInfo>, StoreError> {
        let row = sqlx::query_as::<_, AboutInfo>(
            "SELECT headline, bio, avatar_url, resume_url, updated_at FROM about_info WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn put_about(&self, about: AboutInfo) -> Result<AboutInfo, StoreError> {
        let stored = sqlx::query_as::<_, AboutInfo>(
            "INSERT INTO about_info (id, headline, bio, avatar_url, resume_url, updated_at)
             VALUES (1, $1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                headline = EXCLUDED.headline,
                bio = EXCLUDED.bio,
                avatar_url = EXCLUDED.avatar_url,
                resume_url = EXCLUDED.resume_url,
                updated_at = EXCLUDED.updated_at
             RETURNING headline, bio, avatar_url, resume_url, updated_at",
        )
        .bind(&about.headline)
        .bind(&about.bio)
        .bind(&about.avatar_url)
        .bind(&about.resume_url)
        .bind(about.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn contact_info(&self) -> Result<Option<ContactInfo>, StoreError> {
        let row = sqlx::query_as::<_, ContactInfo>(
            "SELECT email, phone, location, socials, updated_at FROM contact_info WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn put_contact_info(&self, info: ContactInfo) -> Result<ContactInfo, StoreError> {
        let stored = sqlx::query_as::<_, ContactInfo>(
            "INSERT INTO contact_info (id, email, phone, location, socials, updated_at)
             VALUES (1, $1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                location = EXCLUDED.location,
                socials = EXCLUDED.socials,
                updated_at = EXCLUDED.updated_at
             RETURNING email, phone, location, socials, updated_at",
        )
        .bind(&info.email)
        .bind(&info.phone)
        .bind(&info.location)
        .bind(&info.socials)
        .bind(info.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }
}
