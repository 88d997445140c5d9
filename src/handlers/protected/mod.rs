// Protected handlers: every route in this tree sits behind the auth gate
// (see middleware::auth::require_admin). Handler bodies validate their own
// payloads but perform no authorization beyond what the gate already did.
pub mod achievements;
pub mod auth;
pub mod experience;
pub mod github;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod uploads;
