pub mod app;
pub mod principal;
pub mod session;
