// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment flags used by positioning helpers.

use bitflags::bitflags;

bitflags! {
    /// Alignment relative to an actor's bounds.
    ///
    /// Horizontal and vertical components are independent: when neither
    /// [`LEFT`](Self::LEFT) nor [`RIGHT`](Self::RIGHT) is set the alignment is
    /// horizontally centered, and likewise for [`TOP`](Self::TOP) and
    /// [`BOTTOM`](Self::BOTTOM).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Align: u8 {
        /// Centered on both axes.
        const CENTER = 1 << 0;
        /// Top edge.
        const TOP = 1 << 1;
        /// Bottom edge.
        const BOTTOM = 1 << 2;
        /// Left edge.
        const LEFT = 1 << 3;
        /// Right edge.
        const RIGHT = 1 << 4;

        /// Top-left corner.
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        /// Top-right corner.
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        /// Bottom-left corner.
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        /// Bottom-right corner.
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl Align {
    /// Offset from the left edge of a span of `width` for this alignment.
    #[inline]
    #[must_use]
    pub fn horizontal_offset(self, width: f64) -> f64 {
        if self.contains(Self::RIGHT) {
            width
        } else if !self.contains(Self::LEFT) {
            width / 2.0
        } else {
            0.0
        }
    }

    /// Offset from the bottom edge of a span of `height` for this alignment.
    #[inline]
    #[must_use]
    pub fn vertical_offset(self, height: f64) -> f64 {
        if self.contains(Self::TOP) {
            height
        } else if !self.contains(Self::BOTTOM) {
            height / 2.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_halves_both_axes() {
        assert_eq!(Align::CENTER.horizontal_offset(10.0), 5.0);
        assert_eq!(Align::CENTER.vertical_offset(4.0), 2.0);
        assert_eq!(Align::empty().horizontal_offset(10.0), 5.0);
    }

    #[test]
    fn corners_pick_edges() {
        assert_eq!(Align::TOP_RIGHT.horizontal_offset(10.0), 10.0);
        assert_eq!(Align::TOP_RIGHT.vertical_offset(4.0), 4.0);
        assert_eq!(Align::BOTTOM_LEFT.horizontal_offset(10.0), 0.0);
        assert_eq!(Align::BOTTOM_LEFT.vertical_offset(4.0), 0.0);
    }

    #[test]
    fn single_edge_centers_other_axis() {
        assert_eq!(Align::LEFT.vertical_offset(8.0), 4.0);
        assert_eq!(Align::TOP.horizontal_offset(8.0), 4.0);
    }
}
