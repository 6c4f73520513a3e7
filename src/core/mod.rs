pub mod error;
pub mod fields;
pub mod money;
pub mod traits;

pub use error::{AppError, Result};
pub use traits::{Filter, Record, RecordStore};
