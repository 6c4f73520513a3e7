// Custom bills module
//
// Free-form ledger of amounts pending from walk-in customers, kept apart
// from orders.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CustomBill, CustomBillRequest};
pub use repositories::CustomBillRepository;
pub use services::CustomBillService;
