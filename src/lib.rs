pub mod config;
pub mod db;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;
pub mod types;

pub use error::InspireError;
pub use types::{NewQuote, QuoteRead};
