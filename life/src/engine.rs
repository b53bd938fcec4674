//! The contract the controller consumes from an automaton engine.
//!
//! The session and view layers talk to the grid only through [`GridEngine`];
//! the stepping rule itself is the engine's business. All coordinates are
//! zero-based and implementations must clip out-of-range access rather than
//! panic — the controller relies on that to skip pattern cells that spill
//! past the grid edges.

/// Status of a single cell.
///
/// `Empty` covers both never-touched cells and anything outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Alive,
    /// Was alive once and died; rendered distinctly when the display-dead
    /// preference is on.
    Dead,
}

/// Discrete fill levels for random population, as alive-percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    Low = 20,
    Medium = 35,
    High = 50,
}

/// Capability set the controller requires from the automaton.
pub trait GridEngine {
    /// A fresh, all-empty grid of the given dimensions.
    fn create(width: u32, height: u32) -> Self
    where
        Self: Sized;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Whether neighbor lookups wrap across the grid edges.
    fn set_circular(&mut self, circular: bool);

    /// Repopulates every cell at the given density.
    fn randomize(&mut self, density: Density);

    /// Flips one cell between alive and not; out-of-range is a no-op.
    fn toggle(&mut self, x: u32, y: u32);

    /// Cell state at a coordinate; `Cell::Empty` when out of range.
    fn cell(&self, x: u32, y: u32) -> Cell;

    /// Advances exactly one generation.
    fn step(&mut self);
}
