pub mod plain;
pub mod with_error;
pub mod tuple;
pub mod zip;
