pub mod pointer;
pub mod scroll;

pub use pointer::*;
pub use scroll::*;
