// Copyright 2025 the Billet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-down view mapping and per-frame easing.
//!
//! Nothing here touches placement state. Animations advance only when the
//! host calls `tick` with the elapsed time, so any frame source (a timer, a
//! render loop, a test) can drive them.

use kurbo::{Affine, Point, Size, Vec2};

use crate::config::ZoomLimits;

/// A [`Tween`] stops once it is this close to its target.
pub const TWEEN_EPSILON: f64 = 0.001;

/// Easing rate of the view zoom, per second.
pub const ZOOM_RATE: f64 = 12.0;

/// Exponential approach of a value towards a target.
///
/// Each [`tick`](Self::tick) covers `min(1, rate · dt)` of the remaining
/// distance. Once within [`TWEEN_EPSILON`] the value lands on the target and
/// the tween stops.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    value: f64,
    target: f64,
    rate: f64,
    running: bool,
}

impl Tween {
    /// A stopped tween resting at `value`.
    pub fn new(value: f64, rate: f64) -> Self {
        Self {
            value,
            target: value,
            rate,
            running: false,
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value being approached.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether further ticks will change the value.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start moving towards `target`.
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
        self.running = (target - self.value).abs() >= TWEEN_EPSILON;
        if !self.running {
            self.value = target;
        }
    }

    /// Jump to `value` and stop.
    pub fn set(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.running = false;
    }

    /// Advance by `dt` seconds. Returns whether the tween is still running.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.running {
            return false;
        }
        let t = (self.rate * dt).clamp(0.0, 1.0);
        self.value += (self.target - self.value) * t;
        if (self.target - self.value).abs() < TWEEN_EPSILON {
            self.value = self.target;
            self.running = false;
        }
        self.running
    }
}

/// Mapping between canvas pixels and room meters: `world = (canvas - pan) / scale`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pan: Vec2,
    zoom: Tween,
    limits: ZoomLimits,
}

impl Viewport {
    /// A view at the initial scale with the room center at `pan`.
    pub fn new(limits: ZoomLimits, pan: Vec2) -> Self {
        Self {
            pan,
            zoom: Tween::new(limits.clamp(limits.initial_scale), ZOOM_RATE),
            limits,
        }
    }

    /// Current scale in pixels per meter.
    pub fn scale(&self) -> f64 {
        self.zoom.value()
    }

    /// Scale the zoom animation is heading for.
    pub fn target_scale(&self) -> f64 {
        self.zoom.target()
    }

    /// Canvas position of the room center.
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Move the room center to `pan`.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Put the room center in the middle of a canvas.
    pub fn center_in(&mut self, canvas: Size) {
        self.pan = canvas.to_vec2() / 2.0;
    }

    /// Room-to-canvas transform.
    pub fn world_to_canvas(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.scale())
    }

    /// Canvas-to-room transform.
    pub fn canvas_to_world(&self) -> Affine {
        Affine::scale(1.0 / self.scale()) * Affine::translate(-self.pan)
    }

    /// Room position under a canvas point.
    pub fn to_world(&self, canvas: Point) -> Point {
        self.canvas_to_world() * canvas
    }

    /// Canvas point showing a room position.
    pub fn to_canvas(&self, world: Point) -> Point {
        self.world_to_canvas() * world
    }

    /// Room displacement for a pointer drag of `delta` pixels.
    pub fn drag_delta(&self, delta: Vec2) -> Vec2 {
        delta / self.scale()
    }

    /// Apply one wheel step: scrolling down (`delta_y > 0`) zooms out by 10%,
    /// anything else zooms in by 10%. The result is clamped and eased in by
    /// [`tick`](Self::tick).
    pub fn zoom(&mut self, wheel_delta_y: f64) {
        let factor = if wheel_delta_y > 0.0 { 0.9 } else { 1.1 };
        let target = self.limits.clamp(self.zoom.target() * factor);
        self.zoom.retarget(target);
    }

    /// Advance the zoom animation. Returns whether it is still running.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.zoom.tick(dt)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomLimits::default(), Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tween_converges_and_stops() {
        let mut tween = Tween::new(0.0, 10.0);
        assert!(!tween.tick(0.016));
        tween.retarget(1.0);
        assert!(tween.is_running());
        let mut frames = 0;
        while tween.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 1000, "tween never settled");
        }
        assert_eq!(tween.value(), 1.0);
        assert!(!tween.is_running());
    }

    #[test]
    fn large_step_lands_on_target() {
        let mut tween = Tween::new(100.0, 12.0);
        tween.retarget(90.0);
        assert!(!tween.tick(1.0));
        assert_eq!(tween.value(), 90.0);
    }

    #[test]
    fn tiny_retarget_snaps_immediately() {
        let mut tween = Tween::new(1.0, 5.0);
        tween.retarget(1.0005);
        assert!(!tween.is_running());
        assert_eq!(tween.value(), 1.0005);
    }

    #[test]
    fn canvas_world_round_trip() {
        let mut view = Viewport::default();
        view.center_in(Size::new(800.0, 600.0));
        let world = view.to_world(Point::new(525.0, 250.0));
        assert!(approx_eq(world.x, 1.25));
        assert!(approx_eq(world.y, -0.5));
        let back = view.to_canvas(world);
        assert!(approx_eq(back.x, 525.0) && approx_eq(back.y, 250.0));
        assert_eq!(view.drag_delta(Vec2::new(10.0, -20.0)), Vec2::new(0.1, -0.2));
    }

    #[test]
    fn wheel_zoom_eases_within_limits() {
        let mut view = Viewport::default();
        view.zoom(1.0);
        assert!(approx_eq(view.target_scale(), 90.0));
        assert_eq!(view.scale(), 100.0);
        while view.tick(1.0 / 60.0) {}
        assert!(approx_eq(view.scale(), 90.0));

        for _ in 0..50 {
            view.zoom(-1.0);
        }
        assert!(approx_eq(view.target_scale(), 200.0));
        for _ in 0..50 {
            view.zoom(3.0);
        }
        assert!(approx_eq(view.target_scale(), 50.0));
    }
}
