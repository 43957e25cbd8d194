//! Coil phase tables.
//!
//! Each pattern holds one energize flag per coil line, in line order IN1..IN4.

use crate::config::Mode;

/// Energize flags for the four coil lines at one step position.
pub type Pattern = [bool; 4];

/// All coils off.
pub const DE_ENERGIZED: Pattern = [false; 4];

const SINGLE_PHASE: [Pattern; 4] = [
    [true, false, false, false],
    [false, true, false, false],
    [false, false, true, false],
    [false, false, false, true],
];

const DOUBLE_PHASE: [Pattern; 4] = [
    [true, false, false, true],
    [true, true, false, false],
    [false, true, true, false],
    [false, false, true, true],
];

const HALF_STEP: [Pattern; 6] = [
    [true, false, false, false],
    [true, true, false, false],
    [false, true, false, false],
    [false, true, true, false],
    [false, false, true, false],
    [false, false, true, true],
];

/// Ordered, fixed-length sequence of phase patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTable {
    patterns: &'static [Pattern],
}

impl PhaseTable {
    /// Single phase, low torque.
    pub const LOW_TORQUE: Self = Self { patterns: &SINGLE_PHASE };
    /// Double phase, high torque.
    pub const HIGH_TORQUE: Self = Self { patterns: &DOUBLE_PHASE };
    /// Mixed single and double phase.
    pub const HALF_STEP: Self = Self { patterns: &HALF_STEP };

    /// Table for a drive mode.
    #[inline]
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::LowTorque => Self::LOW_TORQUE,
            Mode::HighTorque => Self::HIGH_TORQUE,
            Mode::HalfStep => Self::HALF_STEP,
        }
    }

    /// Number of entries in one cycle.
    #[inline]
    pub const fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false; every table has at least four entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern at `index`, wrapped into range.
    #[inline]
    pub fn pattern(&self, index: usize) -> Pattern {
        self.patterns[index % self.patterns.len()]
    }

    /// All patterns in table order.
    #[inline]
    pub fn patterns(&self) -> &'static [Pattern] {
        self.patterns
    }
}
