pub(crate) mod client;
pub(crate) mod types;

pub(crate) use client::{ActivityFeed, FeedClient, agent};
pub(crate) use types::{PageResult, TripActivity};
