//! algomatch
//!
//! Native driver for the algorithm match client. The state machine lives
//! in `algomatch-common`; this crate adds configuration on disk, the HTTP
//! transport, local file reads and the batch driver that ties them to a
//! [`Session`](algomatch_common::Session).

pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod reader;

pub use client::{Classifier, ServiceClient};
pub use config::Config;
pub use driver::run_batch;
pub use error::{AlgoMatchError, Result};
pub use reader::{files_from_paths, read_text};
