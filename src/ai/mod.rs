//! AI module
//!
//! Local, reactive steering for autonomous entities. There is no route
//! planning; entities only avoid the walls directly ahead of them.

mod steering;

pub use steering::{WanderReport, Wanderer};
