//! Aggregate per-generation flags, derived by the evolution kernel.

use bitflags::bitflags;

bitflags! {
    /// Flags describing one generation of the evolving universe, folded in
    /// by [`crate::kernel::evolve_generation`] from every cell it touches.
    #[derive(Default)]
    pub struct GenFlags: u16 {
        /// The generation was touched since its last evolution and must be
        /// re-stepped before it can be trusted.
        const CHANGED = 0b0000_0000_0001;
        /// At least one cell of this generation is still uncertain.
        const HAS_UNKNOWN_CELLS = 0b0000_0000_0010;
        /// At least one cell of this generation is definitely alive.
        const HAS_ON_CELLS = 0b0000_0000_0100;
        /// At least one cell differs from the stable background and borders
        /// a live stable cell.
        const DIFFERS_FROM_STABLE = 0b0000_0000_1000;
        /// At least one cell differs from the previous generation.
        const DIFFERS_FROM_PREVIOUS = 0b0000_0001_0000;
        /// At least one cell differs from the generation two steps back
        /// (also set when there is no such generation).
        const DIFFERS_FROM_2PREV = 0b0000_0010_0000;
        /// At least one cell of this generation is live, ignoring the
        /// stable background.
        const IS_LIVE = 0b0000_0100_0000;
        /// A forbidden-region cell changed value in this generation.
        const IN_FORBIDDEN_REGION = 0b0000_1000_0000;
        /// This generation does not match the user-specified filter.
        const FILTER_MISMATCH = 0b0001_0000_0000;
    }
}
