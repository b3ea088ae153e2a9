pub mod quotes;
pub mod root;
