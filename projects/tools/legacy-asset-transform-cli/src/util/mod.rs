mod core;
mod handlers;
mod throughput;

pub use core::*;
pub use handlers::*;
pub use throughput::*;
