//! Player record, persistence and session

mod record;
mod session;
pub mod store;

pub use record::{PlayerRecord, Settings};
pub use session::Session;
pub use store::{JsonFileStore, MemoryStore, PlayerStore, StoreError};
