//! Session and permission core: credential lookup, persisted session,
//! reactive session context and the route guards built on it.

pub mod context;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod service;
pub mod storage;

pub use context::{use_session, AuthProvider, SessionContext, SessionPhase};
pub use error::{AuthError, StorageError};
pub use guard::{GuardState, GuardView, RequireAuth, RequireRole};
