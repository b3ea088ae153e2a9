pub mod quote_ops;
