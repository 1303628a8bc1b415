//! XRPC access to the social graph.
//!
//! [`GraphReader`] and [`PackPublisher`] are the seams the harvester and
//! reconciler depend on; [`XrpcClient`] implements both over reqwest, and
//! [`CachedReader`] memoizes thread fetches on disk.

pub mod cache;
pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use cache::{CachedReader, ThreadCache};
pub use client::XrpcClient;
pub use error::XrpcError;
pub use traits::{GraphReader, PackPublisher};
pub use types::{PostThread, StarterPackRecord, StarterPackView, ThreadNode};
