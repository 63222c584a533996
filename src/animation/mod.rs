//! Animation state feeding the presentation layer

mod stride;

pub use stride::{Foot, Stride};
