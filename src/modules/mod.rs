pub mod custom_bills;
pub mod dashboard;
pub mod health;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod settings;
pub mod users;
