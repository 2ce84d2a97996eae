pub mod catalog;
pub mod convert;
pub mod extract;
