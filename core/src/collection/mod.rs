pub mod sequence;
pub mod access;
pub mod where_some;
