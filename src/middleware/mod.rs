pub mod session;

pub use session::{AdminSession, SESSION_COOKIE, require_admin};
