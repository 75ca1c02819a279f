// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-call stream layout: stacking plus boundary synthesis.

extern crate alloc;

use alloc::vec::Vec;

use lamina_core::{Series, StackedSeries};

use crate::baseline::{BaselineError, synthesize_baseline};
use crate::stack::{StackError, StackOrder, stack};

/// Errors returned by [`stream_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// Stacking failed.
    Stack(StackError),
    /// There are no series to lay out.
    EmptyInput,
}

impl From<StackError> for StreamError {
    fn from(err: StackError) -> Self {
        Self::Stack(err)
    }
}

/// A complete stream layout: stacked bands plus the closing boundary series.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamLayout {
    /// Stacked band series, bottom-to-top in stack order.
    pub bands: Vec<StackedSeries>,
    /// The synthesized boundary series.
    pub boundary: StackedSeries,
}

impl StreamLayout {
    /// Returns all series in draw order: every band, then the boundary.
    ///
    /// The boundary is meant to be drawn as a line only; its
    /// [`lamina_core::SeriesKey::Boundary`] key lets a renderer exclude it
    /// from legends and fill interactions.
    pub fn into_draw_list(self) -> Vec<StackedSeries> {
        let mut out = self.bands;
        out.push(self.boundary);
        out
    }
}

/// Stacks `series` and synthesizes the closing boundary in one call.
///
/// This is the full recompute a stream chart performs on every data update.
/// Fails with [`StreamError::EmptyInput`] when `series` is empty, since there
/// is no band to derive a boundary from.
pub fn stream_layout(series: &[Series], order: &StackOrder) -> Result<StreamLayout, StreamError> {
    let bands = stack(series, order)?;
    let boundary = synthesize_baseline(&bands).map_err(|err| match err {
        BaselineError::EmptyInput => StreamError::EmptyInput,
    })?;
    Ok(StreamLayout { bands, boundary })
}
