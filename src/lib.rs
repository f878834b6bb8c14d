//! Pizza Shack server core modules.
//!
//! This crate contains the full backend for the Pizza Shack storefront:
//! configuration, HTTP routing, session persistence over a relational store,
//! request-scoped authentication, and server-rendered page handlers. The
//! binary in `main.rs` wires these together into one ordered request
//! pipeline.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod session;
pub mod startup;
pub mod view;
