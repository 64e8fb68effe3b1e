// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable per-frame driver owning render resources.

use darkroom_scroll::{ListenerId, ListenerKinds, ListenerRegistry};
use tracing::debug;

/// Resources that must be given back explicitly.
pub trait ReleaseResources {
    /// Frees the resources. Called at most once per value.
    fn release(&mut self);
}

/// Stand-in for the globe's renderer, geometry, and material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GpuResources {
    /// Sphere segments along each axis.
    pub segments: u32,
    released: bool,
}

impl GpuResources {
    /// Allocates resources for a sphere with `segments` segments.
    #[must_use]
    pub fn new(segments: u32) -> Self {
        Self {
            segments,
            released: false,
        }
    }

    /// Whether [`release`](ReleaseResources::release) has run.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl ReleaseResources for GpuResources {
    fn release(&mut self) {
        debug!(segments = self.segments, "releasing globe resources");
        self.released = true;
    }
}

/// Frame subscription plus the resources it drives.
///
/// [`start`](Self::start) subscribes to frames; [`cancel`](Self::cancel)
/// unsubscribes and releases the resources. Resources are released exactly
/// once, whether through `cancel` or on drop.
#[derive(Debug)]
pub struct FrameLoop<R: ReleaseResources> {
    listener: Option<ListenerId>,
    resources: Option<R>,
    frames: u64,
    last_time_ms: Option<f64>,
}

impl<R: ReleaseResources> Default for FrameLoop<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ReleaseResources> FrameLoop<R> {
    /// An idle loop.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listener: None,
            resources: None,
            frames: 0,
            last_time_ms: None,
        }
    }

    /// Subscribes to frames and takes ownership of `resources`.
    ///
    /// A running loop is cancelled first, so the old resources are released
    /// before the new ones are installed.
    pub fn start(&mut self, listeners: &mut ListenerRegistry, resources: R) {
        self.cancel(listeners);
        self.listener = Some(listeners.subscribe(ListenerKinds::FRAME));
        self.resources = Some(resources);
        self.frames = 0;
        self.last_time_ms = None;
    }

    /// Advances one frame. Returns the resources to draw with, or `None` once
    /// cancelled.
    pub fn tick(&mut self, time_ms: f64) -> Option<&mut R> {
        self.listener?;
        self.frames += 1;
        self.last_time_ms = Some(time_ms);
        self.resources.as_mut()
    }

    /// Unsubscribes and releases the resources. Safe to call repeatedly.
    pub fn cancel(&mut self, listeners: &mut ListenerRegistry) {
        if let Some(id) = self.listener.take() {
            listeners.unsubscribe(id);
        }
        if let Some(mut resources) = self.resources.take() {
            resources.release();
        }
    }

    /// Whether frames are being delivered.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.listener.is_some()
    }

    /// Frames ticked since the last start.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Timestamp of the last tick.
    #[must_use]
    pub fn last_time_ms(&self) -> Option<f64> {
        self.last_time_ms
    }
}

impl<R: ReleaseResources> Drop for FrameLoop<R> {
    fn drop(&mut self) {
        if let Some(mut resources) = self.resources.take() {
            resources.release();
        }
    }
}
