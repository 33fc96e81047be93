mod category;
mod expense;

pub use category::*;
pub use expense::*;
