pub mod order_service;

pub use order_service::{OrderDetail, OrderService, UpdateOrderDetails};
