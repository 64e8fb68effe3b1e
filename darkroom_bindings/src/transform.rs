// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::f64::consts::PI;
use core::fmt::Write as _;

use kurbo::{Affine, Vec2};
use smallvec::SmallVec;

/// One step of a 2D transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Translation in pixels.
    Translate(Vec2),
    /// Clockwise rotation in degrees (y-down coordinates).
    Rotate(f64),
    /// Per-axis scale.
    Scale(Vec2),
}

/// Ordered transform, applied the way CSS applies a transform list.
///
/// Operations compose left to right: the first op is outermost. This matches
/// both CSS `transform` semantics and `Affine` multiplication order, so
/// [`to_css`](Self::to_css) and [`to_affine`](Self::to_affine) agree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: SmallVec<[TransformOp; 4]>,
}

impl Transform {
    /// The identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a translation.
    #[must_use]
    pub fn translate(mut self, offset: Vec2) -> Self {
        self.ops.push(TransformOp::Translate(offset));
        self
    }

    /// Appends a rotation in degrees.
    #[must_use]
    pub fn rotate(mut self, degrees: f64) -> Self {
        self.ops.push(TransformOp::Rotate(degrees));
        self
    }

    /// Appends a uniform scale.
    #[must_use]
    pub fn scale(mut self, factor: f64) -> Self {
        self.ops.push(TransformOp::Scale(Vec2::new(factor, factor)));
        self
    }

    /// Appends a horizontal-only scale.
    #[must_use]
    pub fn scale_x(mut self, factor: f64) -> Self {
        self.ops.push(TransformOp::Scale(Vec2::new(factor, 1.0)));
        self
    }

    /// The operations in application order.
    #[must_use]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Folds the operations into a single affine matrix.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.ops.iter().fold(Affine::IDENTITY, |acc, op| {
            acc * match *op {
                TransformOp::Translate(v) => Affine::translate(v),
                TransformOp::Rotate(deg) => Affine::rotate(deg * (PI / 180.0)),
                TransformOp::Scale(s) => Affine::scale_non_uniform(s.x, s.y),
            }
        })
    }

    /// Renders as a CSS `transform` value.
    ///
    /// Translations use `translate3d` so hosts get a compositor layer.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            if !out.is_empty() {
                out.push(' ');
            }
            // Writing into a `String` cannot fail.
            let _ = match *op {
                TransformOp::Translate(v) => write!(out, "translate3d({}px, {}px, 0)", v.x, v.y),
                TransformOp::Rotate(deg) => write!(out, "rotate({deg}deg)"),
                TransformOp::Scale(s) if s.x == s.y => write!(out, "scale({})", s.x),
                TransformOp::Scale(s) if s.y == 1.0 => write!(out, "scaleX({})", s.x),
                TransformOp::Scale(s) => write!(out, "scale({}, {})", s.x, s.y),
            };
        }
        if out.is_empty() {
            out.push_str("none");
        }
        out
    }
}
