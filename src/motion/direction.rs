//! Step direction.

/// Direction of travel through the phase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Phase index increases.
    Forward,
    /// Phase index decreases, wrapping below zero.
    Reverse,
}

impl Direction {
    /// Get direction from signed step count. Zero counts as forward.
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    /// Advance `index` one position in this direction, modulo `len`.
    #[inline]
    pub fn advance(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Forward => (index + 1) % len,
            Direction::Reverse => (index + len - 1) % len,
        }
    }
}
