//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod not_found;
pub mod redirect;

pub use health::health_handler;
pub use not_found::not_found_handler;
pub use redirect::redirect_handler;
