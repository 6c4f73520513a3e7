mod line_item;
mod order;

pub use line_item::{OrderLineItem, DEFAULT_ITEM_NAME};
pub use order::{Order, OrderStatus, SHORT_ID_LEN};
