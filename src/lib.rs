#![forbid(unsafe_code)]

//! tvset_simulator — an in-memory television set.
//!
//! Models a TV set owning a bounded channel inventory with power and
//! channel-navigation operations. The set is a single-threaded state
//! machine; its only non-deterministic input is channel discovery, which is
//! an injectable capability so tests stay deterministic.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust
//! use tvset_simulator::prelude::*;
//!
//! let mut set = TvSet::with_discovery("sony", 5, Box::new(FixedDiscovery::new(3)))?;
//! set.turn_on();
//! assert_eq!(set.current_channel().name(), "Channel#3");
//! set.switch_next_channel();
//! assert_eq!(set.current_channel().name(), "Channel#1");
//! # Ok::<(), TvError>(())
//! ```

pub mod prelude;

pub mod channel;
pub mod core;
pub mod discovery;
pub mod set;
