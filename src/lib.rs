//! Group the people replying to a set of posts by the country flag in their
//! reply, and publish one starter pack per country.

pub mod config;
pub mod country;
pub mod flags;
pub mod geo;
pub mod harvest;
pub mod logging;
pub mod packs;
pub mod xrpc;
