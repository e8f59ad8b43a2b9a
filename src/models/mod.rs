pub mod quote;
pub mod prediction;
pub mod response;

pub use quote::*;
pub use prediction::*;
pub use response::*;
