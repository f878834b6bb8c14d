//! HTTP controller endpoints for the Pizza Shack storefront.
//!
//! Controllers render server-side pages from small per-request contexts.
//! They read the resolved principal from a request extension and consume the
//! session's flash message; rendering failures propagate to the
//! error-reporting stage.

pub mod pages;
