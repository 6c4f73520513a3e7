use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::orders::Order;

/// Number of orders listed on the dashboard
pub const RECENT_ORDER_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Sum of every order total, all statuses
    pub total_revenue: Decimal,
    pub total_orders: usize,
    pub pending_orders: usize,
    /// Profiles with role `customer`
    pub total_customers: usize,
    pub recent_orders: Vec<Order>,
}
