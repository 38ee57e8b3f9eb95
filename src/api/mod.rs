//! HTTP layer for request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - One handler per method branch
//! - [`middleware`] - Request tracing
//! - [`response`] - Shared response builders and the default header set

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
