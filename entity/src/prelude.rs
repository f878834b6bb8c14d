pub use super::session::Entity as Session;
pub use super::shack_user::Entity as ShackUser;
