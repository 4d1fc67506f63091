//! Blocking text fetch and atomic file placement.
//!
//! - [`TextSource`] - the "fetch text resource by URL" seam; implemented by
//!   [`ReqwestClient`] in production and by in-memory doubles in tests
//! - [`atomic_write`] / [`read_to_string`] - cache file primitives
//!
//! Mechanism only: no retry, no backoff, no staleness policy.

mod client;
mod error;
mod fs;
mod task_pool;

pub use client::{ClientSetting, TextSource};
pub use error::{FetchError, Result};
pub use fs::{atomic_write, read_to_string};

#[cfg(feature = "reqwest")]
pub use client::ReqwestClient;
