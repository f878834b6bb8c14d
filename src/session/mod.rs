//! Session persistence over the relational store.

pub mod store;

pub use store::SeaOrmStore;
