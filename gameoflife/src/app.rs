// app.rs - Owns both simulations, their visuals and the timer handle

use std::time::Instant;

use automaton::debounce::Debouncer;
use automaton::{
    Ambient, CellCoord, CellVisuals, Coverage, Dimensions, LifeConfig, PointerKind, Session,
    ToolMode, TokioTimers,
};
use eframe::egui::{Color32, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::canvas::Canvas;

pub struct GameOfLife {
    config: LifeConfig,
    timers: TokioTimers,
    rng: StdRng,

    pub foreground: Session,
    pub fg_canvas: Canvas,
    fg_visuals: CellVisuals<usize>,
    pub dimensions: Dimensions,

    pub background: Ambient,
    pub bg_canvas: Canvas,
    bg_visuals: CellVisuals<usize>,
    pub coverage: Coverage,

    viewport: Vec2,
    pub resize: Debouncer,

    pub live_color: Color32,
    pub dead_color: Color32,
    pub ambient_color: Color32,
}

impl GameOfLife {
    pub fn new(config: LifeConfig, mut timers: TokioTimers) -> Self {
        let viewport = Vec2::new(config.window.width, config.window.height);
        let dimensions = foreground_dimensions(&config, viewport);
        let mut rng = match config.background.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let foreground = Session::new(dimensions.grid_dimension, config.foreground_period());
        let mut fg_canvas = Canvas::default();
        let fg_visuals = CellVisuals::for_grid(&mut fg_canvas, foreground.grid());

        let background = Ambient::launch(
            config.background.dimension,
            config.background_period(),
            config.background.alive_probability,
            &mut rng,
            &mut timers,
        );
        let mut bg_canvas = Canvas::default();
        let bg_visuals = CellVisuals::for_grid(&mut bg_canvas, background.grid());
        bg_visuals.paint(background.grid(), &mut bg_canvas);
        let coverage = background_coverage(&config, viewport);

        info!(
            dimension = dimensions.grid_dimension,
            cell_size = dimensions.cell_size,
            "game of life ready"
        );

        Self {
            resize: Debouncer::new(config.resize_quiet()),
            config,
            timers,
            rng,
            foreground,
            fg_canvas,
            fg_visuals,
            dimensions,
            background,
            bg_canvas,
            bg_visuals,
            coverage,
            viewport,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            ambient_color: Color32::from_rgba_unmultiplied(0, 200, 0, 36),
        }
    }

    /// Steps whichever instance each queued tick belongs to, then repaints it.
    pub fn dispatch_ticks(&mut self) {
        for token in self.timers.drain_ticks() {
            if self.foreground.on_tick(token) {
                self.fg_visuals.paint(self.foreground.grid(), &mut self.fg_canvas);
            } else if self.background.on_tick(token) {
                self.bg_visuals.paint(self.background.grid(), &mut self.bg_canvas);
            }
        }
    }

    /// Notes the current viewport size; rebuilds once resizing settles.
    pub fn track_viewport(&mut self, size: Vec2, now: Instant) {
        if size != self.viewport {
            self.viewport = size;
            self.resize.trigger(now);
        }
        if self.resize.poll(now) {
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        self.dimensions = foreground_dimensions(&self.config, self.viewport);
        self.coverage = background_coverage(&self.config, self.viewport);

        self.foreground.reinitialize(self.dimensions.grid_dimension, &mut self.timers);
        self.fg_canvas.reset();
        self.fg_visuals = CellVisuals::for_grid(&mut self.fg_canvas, self.foreground.grid());

        self.background.reseed(&mut self.rng, &mut self.timers);
        self.bg_canvas.reset();
        self.bg_visuals = CellVisuals::for_grid(&mut self.bg_canvas, self.background.grid());
        self.bg_visuals.paint(self.background.grid(), &mut self.bg_canvas);

        info!(
            width = self.viewport.x,
            height = self.viewport.y,
            dimension = self.dimensions.grid_dimension,
            cell_size = self.dimensions.cell_size,
            "viewport resized"
        );
    }

    pub fn toggle_play_pause(&mut self) {
        let state = self.foreground.toggle_play_pause(&mut self.timers);
        debug!(?state, "play/pause");
    }

    pub fn clear(&mut self) {
        self.foreground.clear(&mut self.timers);
        self.fg_visuals.paint(self.foreground.grid(), &mut self.fg_canvas);
    }

    pub fn select_tool(&mut self, tool: ToolMode) {
        self.foreground.select_tool(tool);
        debug!(?tool, "tool selected");
    }

    /// Returns true when a cell changed.
    pub fn pointer(&mut self, kind: PointerKind, coord: Option<CellCoord>) -> bool {
        match self.foreground.handle_pointer(kind, coord) {
            Some(changed) => {
                self.fg_visuals.paint_cell(self.foreground.grid(), changed, &mut self.fg_canvas);
                true
            }
            None => false,
        }
    }

    pub fn release_pointer(&mut self) {
        self.foreground.release_pointer();
    }

    /// Fixed pixel size of background cells; the viewport only changes how many are shown.
    pub fn background_cell_size(&self) -> f32 {
        self.config.background.cell_size as f32
    }
}

fn foreground_dimensions(config: &LifeConfig, viewport: Vec2) -> Dimensions {
    config
        .foreground
        .sizing
        .compute_dimensions(viewport.x, viewport.y, config.foreground.reserved)
}

fn background_coverage(config: &LifeConfig, viewport: Vec2) -> Coverage {
    Coverage::of(viewport.x, viewport.y, config.background.cell_size).within(config.background.dimension)
}
