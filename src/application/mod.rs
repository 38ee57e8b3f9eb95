//! Application layer services implementing business logic.
//!
//! Services consume the domain storage trait and expose the operations the
//! HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Key allocation, dedup and resolution

pub mod services;
