//! Frames for animating a solved run.
//!
//! Nothing here draws. A [`Playback`] converts each trajectory row to
//! Cartesian joint positions so any renderer can show the rods, the trace of
//! the lower bob and, for the cart, the applied force.

use std::time::Duration;

use crate::{
    Trajectory,
    cart::{CartParameters, CartState},
    pendulum::{PendulumParameters, PendulumState},
};

/// Room left around the fully extended rods (m).
const VIEW_MARGIN: f64 = 0.5;

/// One animation frame.
///
/// The pivot sits at `(cart, 0)` with `y` pointing up, so a rod hanging
/// straight down ends at `(cart, -length)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub index: usize,
    /// Sample instant in seconds.
    pub time: f64,
    /// Horizontal pivot position; always 0 for the fixed-pivot pendulum.
    pub cart: f64,
    pub bob1: [f64; 2],
    pub bob2: [f64; 2],
    /// Control force applied at this sample, for cart runs.
    pub force: Option<f64>,
}

/// Axis extents that keep the whole motion in view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl ViewBounds {
    fn around_rods(l1: f64, l2: f64) -> Self {
        let reach = l1 + l2 + VIEW_MARGIN;
        Self {
            x: (-reach, reach),
            y: (-reach, reach),
        }
    }
}

/// Fixed scenery of a cart run, drawn under the moving parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartPanel {
    /// Track segment `(x_min, x_max)`, drawn at `y = 0`.
    pub track: (f64, f64),
    /// Time axis of the force plot, `(0, t_stop)` in seconds.
    pub time: (f64, f64),
    /// Force axis of the force plot, `(f_min, f_max)` in newtons.
    pub force: (f64, f64),
}

impl CartPanel {
    fn new(params: &CartParameters, t_stop: f64) -> Self {
        Self {
            track: (params.x_min, params.x_max),
            time: (0.0, t_stop),
            force: (params.f_min, params.f_max),
        }
    }
}

/// The frames of one solved run, played back at one frame per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    frames: Vec<Frame>,
    interval: Duration,
    bounds: ViewBounds,
    panel: Option<CartPanel>,
}

impl Playback {
    /// Builds frames for a double pendulum on a fixed pivot.
    #[must_use]
    pub fn pendulum(trajectory: &Trajectory<PendulumState>, params: &PendulumParameters) -> Self {
        let frames = trajectory
            .iter()
            .enumerate()
            .map(|(index, (time, row))| {
                let (bob1, bob2) = joints(0.0, row.th1, row.th2, params.l1, params.l2);
                Frame {
                    index,
                    time,
                    cart: 0.0,
                    bob1,
                    bob2,
                    force: None,
                }
            })
            .collect();

        Self {
            frames,
            interval: frame_interval(trajectory.dt()),
            bounds: ViewBounds::around_rods(params.l1, params.l2),
            panel: None,
        }
    }

    /// Builds frames for a double pendulum on a cart.
    ///
    /// `forces[i]` is attached to frame `i`; frames past the end of `forces`
    /// carry no force. `t_stop` closes the time axis of the force plot.
    #[must_use]
    pub fn cart(
        trajectory: &Trajectory<CartState>,
        params: &CartParameters,
        forces: &[f64],
        t_stop: f64,
    ) -> Self {
        let frames = trajectory
            .iter()
            .enumerate()
            .map(|(index, (time, row))| {
                let (bob1, bob2) = joints(row.x, row.th1, row.th2, params.l1, params.l2);
                Frame {
                    index,
                    time,
                    cart: row.x,
                    bob1,
                    bob2,
                    force: forces.get(index).copied(),
                }
            })
            .collect();

        let mut bounds = ViewBounds::around_rods(params.l1, params.l2);
        bounds.x = (bounds.x.0 + params.x_min, bounds.x.1 + params.x_max);

        Self {
            frames,
            interval: frame_interval(trajectory.dt()),
            bounds,
            panel: Some(CartPanel::new(params, t_stop)),
        }
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Wall-clock time between frames for real-time playback.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    /// Track and force-plot extents; `None` for the fixed-pivot pendulum.
    #[must_use]
    pub fn cart_panel(&self) -> Option<CartPanel> {
        self.panel
    }

    /// Positions of the lower bob from the first frame up to and including `index`.
    pub fn trace(&self, index: usize) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.frames
            .iter()
            .take(index.saturating_add(1))
            .map(|frame| frame.bob2)
    }
}

fn frame_interval(dt: f64) -> Duration {
    Duration::try_from_secs_f64(dt).unwrap_or_default()
}

/// Joint positions for a pivot at `(pivot_x, 0)`.
fn joints(pivot_x: f64, th1: f64, th2: f64, l1: f64, l2: f64) -> ([f64; 2], [f64; 2]) {
    let (sin_1, cos_1) = th1.sin_cos();
    let (sin_2, cos_2) = th2.sin_cos();
    let bob1 = [pivot_x + l1 * sin_1, -l1 * cos_1];
    let bob2 = [bob1[0] + l2 * sin_2, bob1[1] - l2 * cos_2];
    (bob1, bob2)
}
