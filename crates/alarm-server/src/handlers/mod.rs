//! HTTP route handlers.

pub mod name;
