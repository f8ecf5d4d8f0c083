//! HTTP handlers.

pub mod graphql;
