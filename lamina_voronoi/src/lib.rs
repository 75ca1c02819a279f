// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clipped Voronoi tessellation of a viewport among weighted markers.
//!
//! Given a set of [`lamina_core::WeightedSite`]s and a clip rectangle,
//! [`tessellate`] partitions the rectangle into one convex
//! [`lamina_core::Cell`] per site: the region of the viewport closer to that
//! site than to any other. Renderers use the cells for proximity-based fills
//! and interaction assignment.
//!
//! Marker radius plays no role in the geometric partition; it only weights
//! styling downstream (see [`lamina_core::fill_opacity`]).

#![no_std]

extern crate alloc;

mod tessellate;

pub use tessellate::{TessellationError, tessellate};
