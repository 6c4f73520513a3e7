mod profile;

pub use profile::{UserProfile, UserProfileUpdate, ADMIN_ROLE, CUSTOMER_ROLE, ROLES};
