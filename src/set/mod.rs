//! The TV-set state machine: channel inventory, power state, and the
//! navigation cursor.
//!
//! All transitions are synchronous and total; the only non-determinism is
//! the injected [`ChannelDiscovery`] draw during auto-detect. Edge-case
//! policy is explicit: every navigation operation is a no-op while the set
//! is off or while the inventory is empty.

use std::fmt;

use crate::channel::{Channel, CurrentChannel};
use crate::core::errors::{Result, TvError};
use crate::discovery::{ChannelDiscovery, RandomDiscovery};

/// Model label stored when the supplied model trims to empty.
pub const UNKNOWN_MODEL: &str = "Unknown model";

/// A simulated television set.
///
/// Owns its channel inventory exclusively; the current channel is an index
/// next to the inventory, so a tuned cursor always refers to a stored
/// channel. The signal flag is cached from the current channel and refreshed
/// on every transition.
pub struct TvSet {
    model: String,
    channel_capacity: usize,
    channels: Vec<Channel>,
    cursor: Option<usize>,
    is_on: bool,
    has_signal: bool,
    turn_on_count: u64,
    discovery: Box<dyn ChannelDiscovery>,
}

impl fmt::Debug for TvSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TvSet")
            .field("model", &self.model)
            .field("channel_capacity", &self.channel_capacity)
            .field("channels", &self.channels)
            .field("cursor", &self.cursor)
            .field("is_on", &self.is_on)
            .field("has_signal", &self.has_signal)
            .field("turn_on_count", &self.turn_on_count)
            .finish_non_exhaustive()
    }
}

impl TvSet {
    /// Create a set with the default random discovery provider.
    ///
    /// The model is trimmed; an empty-after-trim model silently falls back
    /// to [`UNKNOWN_MODEL`]. Zero capacity is rejected.
    pub fn new(model: &str, channel_capacity: usize) -> Result<Self> {
        Self::with_discovery(model, channel_capacity, Box::new(RandomDiscovery::new()))
    }

    /// Create a set with an injected discovery provider.
    pub fn with_discovery(
        model: &str,
        channel_capacity: usize,
        discovery: Box<dyn ChannelDiscovery>,
    ) -> Result<Self> {
        if channel_capacity == 0 {
            return Err(TvError::InvalidCapacity);
        }

        let trimmed = model.trim();
        let model = if trimmed.is_empty() {
            UNKNOWN_MODEL.to_string()
        } else {
            trimmed.to_string()
        };

        Ok(Self {
            model,
            channel_capacity,
            channels: Vec::new(),
            cursor: None,
            is_on: false,
            has_signal: false,
            turn_on_count: 0,
            discovery,
        })
    }

    // ──────────────────── read accessors ────────────────────

    /// Model label of the set.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Maximum channel capacity fixed at construction.
    #[must_use]
    pub const fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    /// Whether the set is switched on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Cached signal flag of the current channel.
    #[must_use]
    pub const fn has_signal(&self) -> bool {
        self.has_signal
    }

    /// Discovered channels in discovery order.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Number of discovered channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// What the set is tuned to right now.
    #[must_use]
    pub fn current_channel(&self) -> CurrentChannel<'_> {
        match self.cursor {
            Some(index) => CurrentChannel::Tuned(&self.channels[index]),
            None => CurrentChannel::NoChannel,
        }
    }

    /// How many times the set has been turned on. Counts calls, not
    /// off-to-on transitions.
    #[must_use]
    pub const fn turn_on_count(&self) -> u64 {
        self.turn_on_count
    }

    // ──────────────────── power ────────────────────

    /// Turn the set on.
    ///
    /// Increments the turn-on counter unconditionally, runs auto-detect when
    /// the inventory is still empty, and refreshes the signal flag.
    pub fn turn_on(&mut self) {
        self.is_on = true;
        self.turn_on_count += 1;

        if self.channels.is_empty() {
            self.auto_detect_channels();
        }

        self.refresh_signal();
    }

    /// Turn the set off. No-op when already off; the tuning cursor survives
    /// a power cycle.
    pub fn turn_off(&mut self) {
        if self.is_on {
            self.has_signal = false;
            self.is_on = false;
        }
    }

    // ──────────────────── channel inventory ────────────────────

    /// Run one discovery pass, replacing the inventory.
    ///
    /// When channels are found, the set tunes to the *last* discovered one;
    /// otherwise it drops back to the untuned state.
    pub fn auto_detect_channels(&mut self) {
        self.channels = self.discovery.discover(self.channel_capacity);
        self.cursor = if self.channels.is_empty() {
            None
        } else {
            Some(self.channels.len() - 1)
        };
        self.refresh_signal();
    }

    // ──────────────────── navigation ────────────────────

    /// Advance to the next channel, wrapping from the last back to the
    /// first. No-op while off or with an empty inventory.
    pub fn switch_next_channel(&mut self) {
        if !self.is_on || self.channels.is_empty() {
            return;
        }

        self.cursor = Some(match self.cursor {
            Some(index) if index + 1 < self.channels.len() => index + 1,
            // Wrap from the last channel; an untuned cursor also lands on
            // the first channel.
            _ => 0,
        });
        self.refresh_signal();
    }

    /// Step back to the previous channel, wrapping from the first to the
    /// last. No-op while off or with an empty inventory.
    pub fn switch_previous_channel(&mut self) {
        if !self.is_on || self.channels.is_empty() {
            return;
        }

        self.cursor = Some(match self.cursor {
            Some(index) if index > 0 => index - 1,
            _ => self.channels.len() - 1,
        });
        self.refresh_signal();
    }

    /// Tune directly to the `channel_number`-th discovered channel
    /// (1-based).
    ///
    /// Numbers above the inventory size clamp silently to the last channel.
    /// Zero is rejected even while the set is off; the power check follows
    /// validation. With the set off or the inventory empty the call is
    /// otherwise a no-op.
    pub fn switch_to(&mut self, channel_number: usize) -> Result<()> {
        if channel_number == 0 {
            return Err(TvError::InvalidChannelNumber {
                requested: channel_number,
            });
        }

        if !self.is_on || self.channels.is_empty() {
            return Ok(());
        }

        self.cursor = Some(channel_number.min(self.channels.len()) - 1);
        self.refresh_signal();
        Ok(())
    }

    fn refresh_signal(&mut self) {
        self.has_signal = self.current_channel().has_signal();
    }
}
