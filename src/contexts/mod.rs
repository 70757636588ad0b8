// Context modules for application state management
pub mod error;
pub mod trip;

pub use error::*;
pub use trip::*;
