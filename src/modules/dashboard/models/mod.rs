mod dashboard_stats;

pub use dashboard_stats::{DashboardStats, RECENT_ORDER_COUNT};
