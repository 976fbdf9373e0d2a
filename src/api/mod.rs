//! HTTP API for the gradebook

mod handlers;
pub mod server;

pub use server::{build_router, ApiServer};
