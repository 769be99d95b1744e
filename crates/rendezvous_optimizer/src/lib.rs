pub mod aggregate;
pub mod attendee;
pub mod batching;
pub mod cost_matrix;
pub mod error;
pub mod grouping;
pub mod meeting_time;
pub mod optimizer;
pub mod round_trip;
pub mod scoring;
pub mod selector;

pub mod json;

#[cfg(test)]
pub(crate) mod test_utils;
