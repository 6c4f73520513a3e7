use crate::core::money::{checked_sum, round_half_up, to_exact_decimal};
use crate::core::{AppError, Result};
use crate::modules::dashboard::models::{DashboardStats, RECENT_ORDER_COUNT};
use crate::modules::dashboard::repositories::DashboardRepository;
use crate::modules::orders::{Order, OrderStatus};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        let orders: Vec<Order> = self
            .repo
            .orders()
            .await?
            .iter()
            .map(Order::from_record)
            .collect();
        let total_customers = self.repo.customer_count().await?;

        let total_revenue = checked_sum(orders.iter().map(|order| to_exact_decimal(order.total)))
            .ok_or_else(|| AppError::internal("Revenue exceeds the supported range"))?;
        let pending_orders = orders
            .iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .count();

        Ok(DashboardStats {
            total_revenue: round_half_up(total_revenue),
            total_orders: orders.len(),
            pending_orders,
            total_customers,
            recent_orders: orders.into_iter().take(RECENT_ORDER_COUNT).collect(),
        })
    }
}
