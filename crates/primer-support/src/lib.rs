pub mod error;
pub mod logging;
pub mod pp;

pub use error::*;
pub use pp::*;
