//! Visual grid state, kept in sync with the engine cell by cell.
//!
//! Only [`ViewGrid::refresh`] scans the whole grid; every other mutation in
//! the controller repaints just the cells it touched.

use crate::engine::{Cell, GridEngine};

/// What a cell looks like on screen. `Preview` is the transient hover
/// highlight and never comes from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPaint {
    Empty,
    Alive,
    Dead,
    Preview,
}

#[derive(Debug)]
pub struct ViewGrid {
    width: u32,
    height: u32,
    cells: Vec<CellPaint>,
}

impl ViewGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![CellPaint::Empty; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> CellPaint {
        if x >= self.width || y >= self.height {
            return CellPaint::Empty;
        }
        self.cells[(x + y * self.width) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, paint: CellPaint) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[(x + y * self.width) as usize] = paint;
    }

    /// Repaints one cell from engine state. Dead cells render distinctly
    /// only when `display_dead` is on; otherwise they look empty.
    pub fn refresh_cell<E: GridEngine>(&mut self, engine: &E, display_dead: bool, x: u32, y: u32) {
        let paint = match engine.cell(x, y) {
            Cell::Alive => CellPaint::Alive,
            Cell::Dead if display_dead => CellPaint::Dead,
            Cell::Dead | Cell::Empty => CellPaint::Empty,
        };
        self.set(x, y, paint);
    }

    /// Repaints every cell and returns the live population.
    pub fn refresh<E: GridEngine>(&mut self, engine: &E, display_dead: bool) -> u64 {
        let mut population = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                self.refresh_cell(engine, display_dead, x, y);
                if engine.cell(x, y) == Cell::Alive {
                    population += 1;
                }
            }
        }
        population
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Density, GridEngine};
    use crate::universe::Universe;

    #[test]
    fn refresh_counts_exactly_the_alive_cells() {
        let mut u = Universe::create(4, 3);
        u.toggle(0, 0);
        u.toggle(2, 1);
        u.toggle(3, 2);
        let mut view = ViewGrid::new(4, 3);
        assert_eq!(3, view.refresh(&u, true));
        assert_eq!(CellPaint::Alive, view.get(2, 1));
        assert_eq!(CellPaint::Empty, view.get(1, 1));
    }

    #[test]
    fn dead_paint_follows_the_preference() {
        let mut u = Universe::create(3, 3);
        u.toggle(1, 1);
        u.step(); // lonely cell dies
        let mut view = ViewGrid::new(3, 3);

        view.refresh(&u, true);
        assert_eq!(CellPaint::Dead, view.get(1, 1));

        view.refresh(&u, false);
        assert_eq!(CellPaint::Empty, view.get(1, 1));
    }

    #[test]
    fn refresh_population_matches_engine_after_randomize() {
        let mut u = Universe::create(20, 20);
        u.randomize(Density::Medium);
        let mut view = ViewGrid::new(20, 20);
        let population = view.refresh(&u, true);
        let expected = (0..20)
            .flat_map(|y| (0..20).map(move |x| (x, y)))
            .filter(|&(x, y)| u.cell(x, y) == crate::engine::Cell::Alive)
            .count() as u64;
        assert_eq!(expected, population);
    }

    #[test]
    fn out_of_range_paint_access_is_clipped() {
        let mut view = ViewGrid::new(2, 2);
        view.set(5, 5, CellPaint::Alive);
        assert_eq!(CellPaint::Empty, view.get(5, 5));
    }
}
