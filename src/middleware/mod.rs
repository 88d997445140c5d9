pub mod auth;
pub mod response;

pub use auth::{require_admin, AdminIdentity};
pub use response::{ApiResponse, ApiResult};
