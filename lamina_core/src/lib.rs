// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared value types for the Lamina layout core.
//!
//! Lamina computes chart-ready geometry before any drawing happens:
//! - stacked (streamgraph-style) series layouts, and
//! - Voronoi partitions of a viewport among weighted markers.
//!
//! This crate owns the data model those transforms share:
//! - **Series and points** for stacking ([`Series`], [`StackedSeries`]),
//! - **Sites and cells** for tessellation ([`WeightedSite`], [`Cell`]),
//! - **Identity keys** treated as opaque comparable tokens ([`SeriesKey`], [`SiteKey`]),
//! - the **opacity policy** shared by chart and map renderers ([`fill_opacity`]).
//!
//! Rendering (paths, scales, transitions, interaction wiring) is out of scope.
//! Every value here is owned by the call that produced it; the layout core
//! keeps no state between invocations.

#![no_std]

extern crate alloc;

mod cell;
mod opacity;
mod series;
mod site;

pub use cell::Cell;
pub use opacity::{BASE_FILL_OPACITY, DIMMED_FILL_OPACITY, fill_opacity};
pub use series::{DataPoint, Series, SeriesKey, StackedPoint, StackedSeries};
pub use site::{SiteKey, WeightedSite, max_radius};
