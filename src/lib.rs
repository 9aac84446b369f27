mod error;

pub mod demo;
pub mod format;
pub mod ops;

pub use demo::BitConsole;
pub use error::{Error, Result};
pub use ops::BitOp;
