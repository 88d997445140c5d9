pub mod files;
pub mod github;
pub mod notify;

pub use files::{FileStore, LocalFileStore};
pub use github::{GithubClient, RepoSummary};
pub use notify::{LogNotifier, MessageNotifier};
