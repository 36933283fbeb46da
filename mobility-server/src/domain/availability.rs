//! Synthetic parking availability.
//!
//! There is no live occupancy feed for parking lots, so each lot gets a
//! stand-in count derived from its place id. The same id always yields the
//! same count.

/// Smallest value [`synthetic_availability`] can return.
pub const MIN_AVAILABLE: u8 = 1;

/// Largest value [`synthetic_availability`] can return.
pub const MAX_AVAILABLE: u8 = 28;

/// SplitMix64 generator.
///
/// Small, fast and fully specified, so the output is reproducible everywhere.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in the inclusive range `[low, high]`.
    ///
    /// Requires `low <= high`.
    pub fn next_in_range(&mut self, low: u8, high: u8) -> u8 {
        debug_assert!(low <= high);
        let span = u64::from(high - low) + 1;
        // span <= 256, so the remainder always fits in a u8
        low + (self.next_u64() % span) as u8
    }
}

/// Seed for a place id: the sum of its characters' code points.
pub fn seed_for(place_id: &str) -> u64 {
    place_id
        .chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u64::from(u32::from(c))))
}

/// Deterministic available-spot count for a parking place, in `[1, 28]`.
pub fn synthetic_availability(place_id: &str) -> u8 {
    SeededRng::new(seed_for(place_id)).next_in_range(MIN_AVAILABLE, MAX_AVAILABLE)
}
