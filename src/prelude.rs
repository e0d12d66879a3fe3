//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use tvset_simulator::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{Result, TvError};

// Channels
pub use crate::channel::{Channel, CurrentChannel, NO_CHANNEL_NAME};

// Discovery
pub use crate::discovery::{ChannelDiscovery, FixedDiscovery, RandomDiscovery};

// The set itself
pub use crate::set::{TvSet, UNKNOWN_MODEL};
