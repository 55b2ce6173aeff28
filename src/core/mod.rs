//! The transformation engine: pure functions from sheet rows to renderable
//! items, plus the cross-trip calendar aggregation.

pub mod calendar;
pub mod duration;
pub mod item;
pub mod time;
pub mod transform;
