pub mod dbitems;

pub use dbitems::*;
