pub mod api;
pub mod context;
pub mod guard;

pub use context::{use_session, SessionContext, SessionStatus};
pub use guard::{RequireCapability, RequireSession};
