//! Users module - account-holder model, service, and traits.

mod users_model;
mod users_service;
mod users_traits;


pub use users_model::User;
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
