// Products module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Product, ProductRequest};
pub use repositories::ProductRepository;
pub use services::ProductService;
