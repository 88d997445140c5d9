// Public handlers: no authentication required. Token acquisition lives here
// too - login is the one auth endpoint outside the gate.
pub mod auth;
pub mod content;
pub mod messages;
