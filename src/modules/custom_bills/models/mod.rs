mod custom_bill;

pub use custom_bill::{CustomBill, CustomBillRequest};
