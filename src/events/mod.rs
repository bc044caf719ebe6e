pub mod layout;
pub mod pointer;

pub use layout::*;
pub use pointer::*;
