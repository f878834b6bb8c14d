pub mod prelude;

pub mod session;
pub mod shack_user;
