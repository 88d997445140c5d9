// Content resources displayed on the public site and managed from the admin
// panel. Shapes are flat; the admin surface owns all mutation.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// 0-100 self-assessed proficiency, rendered as a bar on the site.
    pub proficiency: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    /// None means the position is current.
    pub end_date: Option<NaiveDate>,
    pub summary: String,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Achievement {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Contact-form submission. Created by visitors, read and managed only from
/// the admin inbox.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Singleton: the "about me" block.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AboutInfo {
    pub headline: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Singleton: public contact details and social links.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// label -> URL, e.g. "github" -> "https://github.com/...".
    pub socials: sqlx::types::Json<std::collections::HashMap<String, String>>,
    pub updated_at: DateTime<Utc>,
}
