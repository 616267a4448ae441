//! State Management
//!
//! Global application state and the browser-side token store.

pub mod global;
pub mod storage;

pub use global::{provide_global_state, GlobalState};
pub use storage::LocalStorageTokenStore;
