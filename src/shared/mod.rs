pub mod compare;
pub mod error;
pub mod result;

pub use result::Result;
