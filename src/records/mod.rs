// PRDatabase — Records Module
//
// The signed-in user's client records: add, delete, and search, with the
// full collection persisted after every mutation.

mod error;
mod search;
mod store;

pub use error::RecordError;
pub use search::{filter_records, matches_query};
pub use store::RecordStore;
