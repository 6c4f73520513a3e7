// Users module
//
// Admin view over customer and staff profiles. Accounts themselves live with
// the identity provider; only the profile rows are edited here.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{UserProfile, UserProfileUpdate};
pub use repositories::UserRepository;
pub use services::UserService;
