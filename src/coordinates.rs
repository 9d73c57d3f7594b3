// This file is part of the chequer library.
// Copyright (C) 2024-2026 The chequer developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Coordinate systems.
//!
//! A board geometry picks a coordinate type implementing [`Coordinates`].
//! The rectangular geometry uses [`Square`](crate::Square).

use core::{fmt::Debug, hash::Hash};

/// A position in some coordinate system.
///
/// Coordinates are plain values. Two coordinates denote the same cell if
/// and only if they are equal.
pub trait Coordinates: Copy + Eq + Ord + Hash + Debug {
    /// Number of cells travelled when moving from `self` to `other` along
    /// a straight line of the geometry, or `None` if the two are not on a
    /// common line.
    ///
    /// The distance from a coordinate to itself is `Some(0)`.
    fn distance_to(&self, other: &Self) -> Option<u32>;

    /// Tests for structural equality.
    #[inline]
    fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}
