//! Channel leaf type and the current-tuning view.
//!
//! The "no channel selected" state is a stateless [`CurrentChannel::NoChannel`]
//! variant rather than a shared sentinel object; comparing against the
//! variant is how callers detect an untuned set.

use serde::Serialize;

use crate::core::errors::{Result, TvError};

/// Name reported for the untuned state.
pub const NO_CHANNEL_NAME: &str = "No channel";

/// A named signal source with a signal-present flag.
///
/// The name is validated at construction and fixed afterwards. The signal
/// flag may be flipped by an external collaborator to simulate signal loss;
/// the TV-set core only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel {
    name: String,
    has_signal: bool,
}

impl Channel {
    /// Create a channel with a validated display name.
    pub fn new(name: impl Into<String>, has_signal: bool) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TvError::InvalidChannelName { name });
        }
        Ok(Self { name, has_signal })
    }

    /// Synthesized channel `"Channel#<n>"` with signal present, as produced
    /// by channel discovery. Infallible since the name is never empty.
    #[must_use]
    pub fn numbered(n: usize) -> Self {
        Self {
            name: format!("Channel#{n}"),
            has_signal: true,
        }
    }

    /// Display name of the channel.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the channel carries a correct signal right now.
    #[must_use]
    pub const fn has_signal(&self) -> bool {
        self.has_signal
    }

    /// Collaborator hook: flip the signal flag to simulate signal loss or
    /// recovery. The set picks the change up on its next transition.
    pub fn set_signal(&mut self, present: bool) {
        self.has_signal = present;
    }
}

/// Borrowed view of what the set is tuned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentChannel<'a> {
    /// Nothing tuned. Reports [`NO_CHANNEL_NAME`] and never a signal.
    NoChannel,
    /// Tuned to a channel from the set's inventory.
    Tuned(&'a Channel),
}

impl<'a> CurrentChannel<'a> {
    /// Display name of the tuning target.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::NoChannel => NO_CHANNEL_NAME,
            Self::Tuned(channel) => channel.name.as_str(),
        }
    }

    /// Signal flag of the tuning target; always false when untuned.
    #[must_use]
    pub const fn has_signal(&self) -> bool {
        match self {
            Self::NoChannel => false,
            Self::Tuned(channel) => channel.has_signal,
        }
    }

    /// Whether a real channel is tuned.
    #[must_use]
    pub const fn is_tuned(&self) -> bool {
        matches!(self, Self::Tuned(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_is_kept_verbatim() {
        let ch = Channel::new("Discovery Science", true).unwrap();
        assert_eq!(ch.name(), "Discovery Science");
        assert!(ch.has_signal());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Channel::new("", true).unwrap_err();
        assert_eq!(err.code(), "TV-1002");
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let err = Channel::new("   \t ", false).unwrap_err();
        assert_eq!(err.code(), "TV-1002");
        assert_eq!(err.parameter(), "name");
    }

    #[test]
    fn numbered_channels_have_signal() {
        let ch = Channel::numbered(7);
        assert_eq!(ch.name(), "Channel#7");
        assert!(ch.has_signal());
    }

    #[test]
    fn set_signal_flips_flag() {
        let mut ch = Channel::numbered(1);
        ch.set_signal(false);
        assert!(!ch.has_signal());
        ch.set_signal(true);
        assert!(ch.has_signal());
    }

    #[test]
    fn no_channel_view_reports_sentinel_name_and_no_signal() {
        let view = CurrentChannel::NoChannel;
        assert_eq!(view.name(), NO_CHANNEL_NAME);
        assert!(!view.has_signal());
        assert!(!view.is_tuned());
    }

    #[test]
    fn tuned_view_delegates_to_channel() {
        let ch = Channel::new("Eurosport", false).unwrap();
        let view = CurrentChannel::Tuned(&ch);
        assert_eq!(view.name(), "Eurosport");
        assert!(!view.has_signal());
        assert!(view.is_tuned());
    }

    #[test]
    fn no_channel_is_distinguishable_from_any_real_channel() {
        let ch = Channel::new(NO_CHANNEL_NAME, false).unwrap();
        // Even a channel that borrows the sentinel's name compares unequal
        // to the untuned variant.
        assert_ne!(CurrentChannel::Tuned(&ch), CurrentChannel::NoChannel);
    }
}
