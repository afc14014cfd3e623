// PRDatabase — Store Module
//
// The persistent key-value medium (SQLite file or in-memory map) and the
// typed user, session, and record repositories layered over it.

mod db;
mod error;
mod kv;
mod models;
mod repository;

pub use db::Database;
pub use error::StoreError;
pub use kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use models::{ClientRecord, NewClientRecord, NewUser, RegisteredUser};
pub use repository::{
    records_key, LocalRepository, RecordRepository, SessionRepository, UserRepository,
    REGISTERED_USERS_KEY, SESSION_KEY,
};
