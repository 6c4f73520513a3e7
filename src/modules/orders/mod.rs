// Orders module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Order, OrderLineItem, OrderStatus};
pub use repositories::OrderRepository;
pub use services::OrderService;
