//! Wire-level constants shared by every lexicon union and record.

/// Reserved field carrying a union member's schema identifier.
pub const DEFAULT_DISCRIMINATOR: &str = "$type";

/// Fractional-second digits emitted for timestamps.
pub const TIMESTAMP_FRACTION_DIGITS: u16 = 3;
