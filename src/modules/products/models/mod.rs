mod product;

pub use product::{new_product_id, Product, ProductRequest, PRODUCT_ID_PREFIX};
