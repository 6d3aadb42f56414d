//! Command implementations for tagpath

pub mod dispatch;
pub mod distance;
pub mod export;
pub mod link;
pub mod neighbors;
pub mod show;
pub mod stats;
