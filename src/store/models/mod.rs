pub mod admin;
pub mod content;

pub use admin::{Admin, AdminProfile};
pub use content::{AboutInfo, Achievement, ContactInfo, Experience, Message, Project, Skill};
