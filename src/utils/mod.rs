pub mod error;
pub mod logger;
pub mod num_parser;
pub mod str_parser;
pub mod validation;
