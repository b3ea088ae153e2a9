pub mod quote;

pub use quote::{NewQuote, QuoteCreate, QuoteRead, ValidationError};
