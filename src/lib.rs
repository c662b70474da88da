//! Rental catalog core: fetched offers and reviews in, render-ready views out.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod state;

pub use error::{DataError, Result};
pub use session::Session;
