//! Background fetch workers.
//!
//! Each worker reads requests from an unbounded channel, calls the news API
//! and reports either a response or a [`crate::state::FetchFailure`].

pub mod categories;
pub mod details;
pub mod news;
