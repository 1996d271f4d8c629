/// Constants used by pair generation strategy selection and output.
pub mod pairing {
    /// Weight assigned to every generated pair.
    pub const GENERATED_PAIR_WEIGHT: f32 = 1.0;
    /// Divisor applied to a group's valid pair count before comparing it to the cap.
    ///
    /// A group is enumerated exhaustively when `pair_count / divisor < cap`,
    /// otherwise pairs are drawn by rejection sampling. This is a cost
    /// heuristic, not a tight bound, and changing it changes which pairs a
    /// fixed seed selects.
    pub const BRUTE_FORCE_PAIR_COUNT_DIVISOR: u64 = 2;
}

/// Constants used by the seeded generator.
pub mod rng {
    /// Golden-ratio increment added to the splitmix64 state on every draw.
    pub const SPLITMIX_INCREMENT: u64 = 0x9E37_79B9_7F4A_7C15;
    /// First splitmix64 finalizer multiplier.
    pub const SPLITMIX_MUL_1: u64 = 0xBF58_476D_1CE4_E5B9;
    /// Second splitmix64 finalizer multiplier.
    pub const SPLITMIX_MUL_2: u64 = 0x94D0_49BB_1331_11EB;
}

/// Constants used by configuration defaults and parsing.
pub mod config {
    /// Seed used when the caller does not provide one.
    pub const DEFAULT_SEED: u64 = 42;
    /// Accepted spellings of the unbounded pair cap.
    pub const UNBOUNDED_CAP_TOKENS: [&str; 3] = ["unbounded", "max", "none"];
}

/// Constants used by the observation reader and pair writer.
pub mod io {
    /// Lines starting with this marker are ignored by the observation reader.
    pub const COMMENT_MARKER: char = '#';
    /// Column separator used by TSV pair output.
    pub const TSV_SEPARATOR: char = '\t';
    /// Header row emitted ahead of TSV pair output.
    pub const TSV_HEADER: &str = "winner\tloser\tweight";
}
