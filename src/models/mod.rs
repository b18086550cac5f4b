//! Core data structures: working canvas, finished bit matrix, symbol types

pub mod canvas;
pub mod matrix;
pub mod symbol;

pub use canvas::{BitCanvas, Module};
pub use matrix::BitMatrix;
pub use symbol::{ECLevel, MaskPattern, Symbol, Version};
