//! Login session identity and its on-disk store.

mod identity;
mod store;

pub use identity::{ADMIN_ROLE, SessionIdentity};
pub use store::SessionStore;
