//! HTTP request handlers, one per method branch.

pub mod preflight;
pub mod redirect;
pub mod shorten;

pub use preflight::preflight_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
