//! Channel discovery capability: the one non-deterministic boundary.
//!
//! The set's state machine stays deterministic by taking discovery as an
//! injected dependency. The output contract is shared by every provider:
//! between `0` and `capacity - 1` channels (the upper bound is exclusive on
//! purpose, so a positive capacity can still discover nothing), named
//! `"Channel#1"` through `"Channel#k"` in order, each with signal present.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::channel::Channel;

/// Produces the channel inventory for one auto-detect pass.
pub trait ChannelDiscovery {
    /// Discover up to `capacity - 1` channels. `capacity` is at least 1.
    fn discover(&mut self, capacity: usize) -> Vec<Channel>;
}

fn synthesize(count: usize) -> Vec<Channel> {
    (1..=count).map(Channel::numbered).collect()
}

/// Default provider: uniform random draw in `[0, capacity)`.
#[derive(Debug)]
pub struct RandomDiscovery {
    rng: StdRng,
}

impl RandomDiscovery {
    /// Provider seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible provider for scripted runs and tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelDiscovery for RandomDiscovery {
    fn discover(&mut self, capacity: usize) -> Vec<Channel> {
        let count = self.rng.random_range(0..capacity);
        synthesize(count)
    }
}

/// Deterministic provider returning a fixed count, clamped to the contract
/// bound. Doubles as the mock for eliminating randomness in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedDiscovery {
    count: usize,
}

impl FixedDiscovery {
    /// Provider that always reports `count` channels (subject to capacity).
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl ChannelDiscovery for FixedDiscovery {
    fn discover(&mut self, capacity: usize) -> Vec<Channel> {
        synthesize(self.count.min(capacity.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_draw_stays_below_capacity() {
        let mut discovery = RandomDiscovery::seeded(0xBEEF);
        for _ in 0..200 {
            let channels = discovery.discover(6);
            assert!(channels.len() < 6, "draw must stay in [0, capacity)");
        }
    }

    #[test]
    fn random_draw_can_find_nothing() {
        let mut discovery = RandomDiscovery::seeded(7);
        let saw_empty = (0..200).any(|_| discovery.discover(3).is_empty());
        assert!(saw_empty, "zero-channel outcome must be reachable");
    }

    #[test]
    fn capacity_one_always_finds_nothing() {
        let mut discovery = RandomDiscovery::seeded(1);
        for _ in 0..20 {
            assert!(discovery.discover(1).is_empty());
        }
    }

    #[test]
    fn same_seed_same_inventory() {
        let mut a = RandomDiscovery::seeded(42);
        let mut b = RandomDiscovery::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.discover(16), b.discover(16));
        }
    }

    #[test]
    fn channels_are_numbered_in_discovery_order() {
        let mut discovery = FixedDiscovery::new(4);
        let channels = discovery.discover(10);
        let names: Vec<&str> = channels.iter().map(Channel::name).collect();
        assert_eq!(names, ["Channel#1", "Channel#2", "Channel#3", "Channel#4"]);
        assert!(channels.iter().all(Channel::has_signal));
    }

    #[test]
    fn fixed_discovery_clamps_to_contract_bound() {
        let mut discovery = FixedDiscovery::new(99);
        assert_eq!(discovery.discover(5).len(), 4);
        assert!(discovery.discover(1).is_empty());
    }
}
