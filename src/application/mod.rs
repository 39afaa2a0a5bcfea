//! Application layer: input parsing and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod input;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use input::{parse_manual, parse_records, InputLoader, InputSource};
pub use session::{TreeSession, TreeSummary};
