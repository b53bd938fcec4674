//! One interactive session: a grid, its simulation state, the selected
//! pattern and the transient hover preview, behind the entry points the
//! control surface invokes.
//!
//! The session owns everything that was ambient module state in earlier
//! designs, so independent sessions can coexist. Mutation rights alternate
//! between pointer handling (Editing) and the tick loop (Running); the
//! state flag enforces the exclusion, no lock involved.

use std::time::{Duration, Instant};

use crate::engine::{Cell, Density, GridEngine};
use crate::error::SelectError;
use crate::pattern::{Pattern, PatternCatalog, Rotation, POINTER_KEY};
use crate::sim::{SimState, Simulation};
use crate::view::{CellPaint, ViewGrid};

/// The remembered hover: its anchor and the cells it highlighted.
#[derive(Debug)]
struct Preview {
    anchor: (u32, u32),
    cells: Vec<(u32, u32)>,
}

pub struct Session<E: GridEngine> {
    catalog: PatternCatalog,
    engine: E,
    sim: Simulation,
    view: ViewGrid,
    /// Selected pattern, held by value; rotation replaces it.
    selected: Pattern,
    selected_key: String,
    preview: Option<Preview>,
    display_dead: bool,
    circular: bool,
    population: u64,
}

impl<E: GridEngine> Session<E> {
    pub fn new(catalog: PatternCatalog, width: u32, height: u32) -> Self {
        let mut engine = E::create(width, height);
        engine.set_circular(true);
        let selected = catalog
            .get(POINTER_KEY)
            .expect("catalog always holds the pointer pattern")
            .clone();
        Self {
            catalog,
            engine,
            sim: Simulation::new(),
            view: ViewGrid::new(width, height),
            selected,
            selected_key: POINTER_KEY.to_string(),
            preview: None,
            display_dead: true,
            circular: true,
            population: 0,
        }
    }

    // --- Control entry points ---

    /// Replaces the grid with a fresh one of the given size, resetting the
    /// generation and population counters. Refused while Running.
    pub fn update_universe(&mut self, width: u32, height: u32) -> bool {
        if self.sim.is_running() {
            log::warn!("resize ignored while running");
            return false;
        }
        self.engine = E::create(width, height);
        self.engine.set_circular(self.circular);
        self.view = ViewGrid::new(width, height);
        self.sim.reset_generation();
        self.preview = None;
        self.population = 0;
        true
    }

    /// Randomly repopulates the grid at the given density.
    pub fn random_universe(&mut self, density: Density) -> bool {
        if self.sim.is_running() {
            return false;
        }
        self.preview = None;
        self.engine.randomize(density);
        self.refresh();
        true
    }

    /// Starts the stepping loop. Any live preview is dropped first; a play
    /// while already Running changes nothing.
    pub fn play_universe(&mut self, now: Instant, interval: Duration) -> bool {
        if self.sim.is_running() {
            return false;
        }
        self.clear_preview();
        self.sim.play(now, interval)
    }

    /// Cancels the pending tick and returns to Editing.
    pub fn stop_universe(&mut self) -> bool {
        self.sim.stop()
    }

    pub fn set_circular_universe(&mut self, circular: bool) {
        if self.sim.is_running() {
            return;
        }
        self.circular = circular;
        self.engine.set_circular(circular);
    }

    /// Toggles distinct rendering of dead cells and repaints the grid.
    pub fn set_display_dead(&mut self, display_dead: bool) {
        if self.sim.is_running() {
            return;
        }
        self.display_dead = display_dead;
        let restore = self.preview.take();
        self.refresh();
        if let Some(p) = restore {
            self.hover(p.anchor.0, p.anchor.1);
        }
    }

    pub fn select_pattern(&mut self, key: &str) -> Result<(), SelectError> {
        let pattern = self.catalog.get(key)?.clone();
        self.clear_preview();
        self.selected = pattern;
        self.selected_key = key.to_string();
        Ok(())
    }

    /// Drives at most one due tick: engine step, generation count, full
    /// refresh, then re-arm. Returns true if a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.sim.take_due_tick(now) {
            return false;
        }
        self.engine.step();
        self.sim.advance_generation();
        self.refresh();
        // Armed only now, after the tick's work; ticks stay sequential.
        self.sim.rearm(now);
        true
    }

    // --- Pointer and keyboard input ---

    /// Previews the selected pattern's footprint at an anchor, without
    /// touching the engine. Ignored while Running.
    pub fn hover(&mut self, x: u32, y: u32) {
        if self.sim.is_running() {
            return;
        }
        if let Some(p) = &self.preview {
            if p.anchor == (x, y) {
                return;
            }
        }
        self.clear_preview();
        let cells = self.stamp_cells(x, y);
        for &(cx, cy) in &cells {
            self.view.set(cx, cy, CellPaint::Preview);
        }
        self.preview = Some(Preview { anchor: (x, y), cells });
    }

    /// Restores the true engine-backed paint of any previewed cells.
    pub fn leave(&mut self) {
        if self.sim.is_running() {
            return;
        }
        self.clear_preview();
    }

    /// Stamps the selected pattern: toggles every in-bounds cell and
    /// repaints just those cells. Ignored while Running.
    pub fn click(&mut self, x: u32, y: u32) {
        if self.sim.is_running() {
            return;
        }
        self.clear_preview();
        let cells = self.stamp_cells(x, y);
        for &(cx, cy) in &cells {
            self.engine.toggle(cx, cy);
            if self.engine.cell(cx, cy) == Cell::Alive {
                self.population += 1;
            } else {
                self.population -= 1;
            }
            self.view.refresh_cell(&self.engine, self.display_dead, cx, cy);
        }
    }

    /// Rotates the selected pattern and, if a hover is live, re-previews
    /// the rotated footprint at the same anchor. Ignored while Running and
    /// for single-cell patterns.
    pub fn rotate(&mut self, direction: Rotation) {
        if self.sim.is_running() || self.selected.is_single() {
            return;
        }
        self.selected = self.selected.rotated(direction);
        if let Some(p) = self.preview.take() {
            let (ax, ay) = p.anchor;
            for (cx, cy) in p.cells {
                self.view.refresh_cell(&self.engine, self.display_dead, cx, cy);
            }
            self.hover(ax, ay);
        }
    }

    // --- State access ---

    pub fn view(&self) -> &ViewGrid {
        &self.view
    }

    pub fn generation(&self) -> u64 {
        self.sim.generation()
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn state(&self) -> SimState {
        self.sim.state()
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.sim.set_interval(interval);
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn selected_pattern(&self) -> &Pattern {
        &self.selected
    }

    pub fn selected_key(&self) -> &str {
        &self.selected_key
    }

    pub fn display_dead(&self) -> bool {
        self.display_dead
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    // --- Internals ---

    /// Recomputes every cell's paint and the population counter.
    fn refresh(&mut self) {
        self.population = self.view.refresh(&self.engine, self.display_dead);
    }

    /// Anchor plus each offset, keeping only cells inside
    /// `[0,width) × [0,height)`. Spill-over on any side is skipped.
    fn stamp_cells(&self, sx: u32, sy: u32) -> Vec<(u32, u32)> {
        let w = self.engine.width() as i64;
        let h = self.engine.height() as i64;
        self.selected
            .offsets()
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = sx as i64 + dx as i64;
                let y = sy as i64 + dy as i64;
                if x < 0 || x >= w || y < 0 || y >= h {
                    None
                } else {
                    Some((x as u32, y as u32))
                }
            })
            .collect()
    }

    fn clear_preview(&mut self) {
        if let Some(p) = self.preview.take() {
            for (x, y) in p.cells {
                self.view.refresh_cell(&self.engine, self.display_dead, x, y);
            }
        }
    }
}
