//! The aggregation pipeline: fan-out, normalize, dedup, rank.

pub mod dedup;
pub mod normalize;
pub mod ranking;
pub mod search;
