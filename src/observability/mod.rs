//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! transport / query / broadcast produce:
//!     → tracing events (RPC calls, empty results, rejected broadcasts)
//!     → metrics.rs (counters, histograms via the `metrics` facade)
//!
//! Consumers:
//!     → logging.rs subscriber installed by the binary or embedding app
//!     → whatever recorder the embedding app installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder itself
//! - Key material is never logged

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
