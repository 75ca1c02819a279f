// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking transforms for layered (streamgraph-style) charts.
//!
//! This crate provides:
//! - [`stack`]: a stacking transform converting index-aligned series into
//!   cumulative `y0`/`y1` offsets,
//! - [`synthesize_baseline`]: the synthetic boundary series that closes a
//!   stacked silhouette, and
//! - [`stream_layout`]: both steps as one call, producing a render-ready
//!   draw list.
//!
//! The transforms are intentionally simple:
//! - every call recomputes from scratch (no incremental update), and
//! - inputs are never mutated; each call returns owned output or a typed
//!   error with no partial result.

#![no_std]

extern crate alloc;

mod baseline;
mod stack;
mod stream;

pub use baseline::{BaselineError, synthesize_baseline};
pub use stack::{StackError, StackOrder, stack};
pub use stream::{StreamError, StreamLayout, stream_layout};
