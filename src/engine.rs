//! Drawing engine: owns the persistent canvas, the undo snapshots and the
//! frame-by-frame stroke animation.
//!
//! Two states. `start` computes and fits a curve, snapshots the canvas and
//! enters drawing; each `step` paints up to `speed` segments. Reaching the end
//! of the point list commits a layer. `undo` and `clear` cancel any animation
//! immediately. A curve interrupted by a new `start` stays on the canvas as
//! drawn so far.

use crate::background::make_background;
use crate::color::ColorSource;
use crate::config::Config;
use crate::draw::draw_thick_line;
use crate::error::Result;
use crate::fit::{fit_to_canvas, max_extent};
use crate::spiro::{compute_points, get_period};
use crate::types::{FrameBuffer, MechanismParams, Point, PointSequence};
use crate::undo::UndoStack;
use tracing::{debug, info};

pub struct DrawingEngine {
    canvas_size: usize,
    margin: f64,
    steps: usize,
    background: FrameBuffer,
    canvas: FrameBuffer,
    undo: UndoStack,
    points: PointSequence,
    draw_index: usize,
    draw_total: usize,
    drawing: bool,
    layer_count: usize,
}

impl DrawingEngine {
    /// Fresh engine: canvas = background, nothing to undo, idle.
    pub fn new(config: &Config) -> Self {
        let background = make_background(config.canvas_size, &config.background);
        Self {
            canvas_size: config.canvas_size,
            margin: config.canvas_margin,
            steps: config.curve_steps.max(1),
            canvas: background.clone(),
            background,
            undo: UndoStack::with_depth(config.max_undo),
            points: Vec::new(),
            draw_index: 0,
            draw_total: 0,
            drawing: false,
            layer_count: 0,
        }
    }

    /// Validate `(R, r, d)` and begin animating that curve.
    /// Rejects `r >= R`, `r < 1`, `R < 1` and `d < 0` without touching any state.
    pub fn start(&mut self, outer: i32, inner: i32, offset: i32) -> Result<()> {
        let params = MechanismParams::new(outer, inner, offset)?;
        self.start_with(params);
        Ok(())
    }

    /// Begin animating an already-validated curve.
    pub fn start_with(&mut self, params: MechanismParams) {
        let (outer, inner, offset) = (params.outer() as f64, params.inner() as f64, params.offset() as f64);
        let raw = compute_points(outer, inner, offset, self.steps);
        let extent = max_extent(&raw);
        debug!(
            period = get_period(outer, inner),
            extent,
            scale = (self.canvas_size as f64 / 2.0 - self.margin) / extent,
            points = raw.len(),
            "curve computed"
        );

        if self.drawing {
            debug!(at = self.draw_index, of = self.draw_total, "previous curve interrupted");
        }

        self.points = fit_to_canvas(&raw, self.canvas_size as f64, self.margin);
        self.draw_total = self.points.len();
        self.draw_index = 1;
        self.undo.push(self.canvas.clone());
        self.drawing = true;
        info!(r_outer = params.outer(), r_inner = params.inner(), pen = params.offset(), "drawing started");
    }

    /// Paint up to `speed` segments. Returns how many were painted.
    /// No-op while idle.
    pub fn step(&mut self, speed: usize, thickness: u32, colors: &ColorSource) -> usize {
        if !self.drawing {
            return 0;
        }
        let mut painted = 0;
        for _ in 0..speed {
            if self.draw_index >= self.draw_total {
                self.drawing = false;
                self.layer_count += 1;
                info!(layers = self.layer_count, "curve finished");
                break;
            }
            let p1 = self.points[self.draw_index - 1];
            let p2 = self.points[self.draw_index];
            let color = colors.resolve(self.draw_index, self.draw_total);
            draw_thick_line(
                &mut self.canvas,
                p1.x as i32, p1.y as i32,
                p2.x as i32, p2.y as i32,
                thickness,
                color,
            );
            self.draw_index += 1;
            painted += 1;
        }
        painted
    }

    /// Restore the most recent snapshot; cancels any animation.
    /// Returns false (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo.pop() else {
            return false;
        };
        self.drawing = false;
        self.canvas = snapshot;
        self.layer_count = self.layer_count.saturating_sub(1);
        info!(layers = self.layer_count, remaining = self.undo.len(), "undo");
        true
    }

    /// Snapshot, then reset the canvas to the blank background.
    pub fn clear(&mut self) {
        self.undo.push(self.canvas.clone());
        self.drawing = false;
        self.canvas = self.background.clone();
        self.layer_count = 0;
        info!(undo_depth = self.undo.len(), "canvas cleared");
    }

    pub fn canvas(&self) -> &FrameBuffer {
        &self.canvas
    }

    /// The blank canvas template `clear` restores.
    pub fn background(&self) -> &FrameBuffer {
        &self.background
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn draw_index(&self) -> usize {
        self.draw_index
    }

    pub fn draw_total(&self) -> usize {
        self.draw_total
    }

    /// Fraction of the current curve drawn, in [0,1].
    pub fn progress(&self) -> f64 {
        self.draw_index as f64 / self.draw_total.max(1) as f64
    }

    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Canvas-space points of the most recent curve.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
