//! Dirty mask
//!
//! Bitset of matrix regions that changed since the previous frame. The
//! matrix driver rewrites only the columns covered by set bits, which keeps
//! bus traffic and visible flicker down.
//!
//! Clock digits have one bit set per font variant so that a region drawn in
//! one font never aliases a region of another.

use core::ops::{BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Changed-region bitset passed to `MatrixDisplay::swap_buffers`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirtyMask(u32);

impl DirtyMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    // Normal font, also used by every edit view
    pub const HOUR_TENS: Self = Self(1 << 0);
    pub const HOUR_UNITS: Self = Self(1 << 1);
    pub const MIN_TENS: Self = Self(1 << 2);
    pub const MIN_UNITS: Self = Self(1 << 3);
    pub const SEC_TENS: Self = Self(1 << 4);
    pub const SEC_UNITS: Self = Self(1 << 5);

    // Big font
    pub const BIG_HOUR_TENS: Self = Self(1 << 6);
    pub const BIG_HOUR_UNITS: Self = Self(1 << 7);
    pub const BIG_MIN_TENS: Self = Self(1 << 8);
    pub const BIG_MIN_UNITS: Self = Self(1 << 9);

    // Extra font
    pub const EXTRA_HOUR_TENS: Self = Self(1 << 10);
    pub const EXTRA_HOUR_UNITS: Self = Self(1 << 11);
    pub const EXTRA_MIN_TENS: Self = Self(1 << 12);
    pub const EXTRA_MIN_UNITS: Self = Self(1 << 13);

    // Brightness level digits
    pub const BR_TENS: Self = Self(1 << 14);
    pub const BR_UNITS: Self = Self(1 << 15);

    /// Alarm-edit units digit / presence glyph
    pub const ALARM: Self = Self(1 << 16);

    /// Alarm weekday column
    pub const WEEKDAYS: Self = Self(1 << 17);

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 == u32::MAX
    }

    /// Check whether every bit of `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `self` when `condition` holds, otherwise empty
    pub const fn when(self, condition: bool) -> Self {
        if condition {
            self
        } else {
            Self::NONE
        }
    }
}

impl BitOr for DirtyMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DirtyMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
