pub mod custom_bill_repository;

pub use custom_bill_repository::CustomBillRepository;
