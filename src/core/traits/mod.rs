pub mod record_store;

pub use record_store::{collections, Condition, Filter, OrderBy, Record, RecordStore};
