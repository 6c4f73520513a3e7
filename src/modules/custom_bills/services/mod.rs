pub mod custom_bill_service;

pub use custom_bill_service::CustomBillService;
