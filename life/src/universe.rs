//! Reference automaton engine: a flat-buffer toroidal Game of Life.
//!
//! Keeps the `Empty`/`Dead` distinction so the view can tint cells that
//! died, and honors the classic B3/S23 rule. The controller only ever sees
//! it through the [`GridEngine`] trait.

use std::fmt;

use rand::Rng;

use crate::engine::{Cell, Density, GridEngine};

#[derive(Debug, Clone)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    circular: bool,
}

impl Universe {
    fn index(&self, x: u32, y: u32) -> usize {
        (x + y * self.width) as usize
    }

    /// Sets every cell to the given state; handy for tests and clearing.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn is_circular(&self) -> bool {
        self.circular
    }

    fn live_neighbor_count(&self, x: u32, y: u32) -> usize {
        let w = self.width as i64;
        let h = self.height as i64;
        let mut count = 0;
        for dy in [-1i64, 0, 1] {
            for dx in [-1i64, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let mut nx = x as i64 + dx;
                let mut ny = y as i64 + dy;
                if self.circular {
                    nx = nx.rem_euclid(w);
                    ny = ny.rem_euclid(h);
                } else if nx < 0 || nx >= w || ny < 0 || ny >= h {
                    continue;
                }
                if self.cells[self.index(nx as u32, ny as u32)] == Cell::Alive {
                    count += 1;
                }
            }
        }
        count
    }
}

impl GridEngine for Universe {
    fn create(width: u32, height: u32) -> Self {
        let cells = vec![Cell::Empty; (width * height) as usize];
        Self {
            width,
            height,
            cells,
            circular: true,
        }
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_circular(&mut self, circular: bool) {
        self.circular = circular;
    }

    fn randomize(&mut self, density: Density) {
        let threshold = density as u8;
        let mut rng = rand::thread_rng();
        for cell in &mut self.cells {
            let roll: u8 = rng.gen_range(0..100);
            *cell = if roll < threshold { Cell::Alive } else { Cell::Empty };
        }
    }

    fn toggle(&mut self, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.cells[index] = if self.cells[index] == Cell::Alive {
            Cell::Empty
        } else {
            Cell::Alive
        };
    }

    fn cell(&self, x: u32, y: u32) -> Cell {
        if x >= self.width || y >= self.height {
            return Cell::Empty;
        }
        self.cells[self.index(x, y)]
    }

    fn step(&mut self) {
        let mut next = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[self.index(x, y)];
                let neighbors = self.live_neighbor_count(x, y);
                next.push(match (cell, neighbors) {
                    (Cell::Alive, n) if n < 2 => Cell::Dead,
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
                    (Cell::Alive, _) => Cell::Dead,
                    (Cell::Dead, 3) | (Cell::Empty, 3) => Cell::Alive,
                    (other, _) => other,
                });
            }
        }
        self.cells = next;
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for &cell in row {
                let glyph = match cell {
                    Cell::Empty => ' ',
                    Cell::Alive => '◼',
                    Cell::Dead => '◻',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_toggle_and_query() {
        let mut u = Universe::create(60, 40);
        assert_eq!(60, u.width());
        assert_eq!(40, u.height());
        assert_eq!(Cell::Empty, u.cell(6, 4));

        u.toggle(6, 4);
        assert_eq!(Cell::Alive, u.cell(6, 4));
        u.toggle(6, 4);
        assert_eq!(Cell::Empty, u.cell(6, 4));
    }

    #[test]
    fn out_of_range_access_is_clipped() {
        let mut u = Universe::create(3, 3);
        u.toggle(3, 1);
        u.toggle(1, 7);
        assert_eq!(Cell::Empty, u.cell(3, 1));
        assert_eq!(Cell::Empty, u.cell(99, 99));
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(Cell::Empty, u.cell(x, y));
            }
        }
    }

    #[test]
    fn blinker_oscillates() {
        let mut u = Universe::create(5, 5);
        u.set_circular(false);
        for (x, y) in [(1, 2), (2, 2), (3, 2)] {
            u.toggle(x, y);
        }

        u.step();
        assert_eq!(Cell::Alive, u.cell(2, 1));
        assert_eq!(Cell::Alive, u.cell(2, 2));
        assert_eq!(Cell::Alive, u.cell(2, 3));
        assert_eq!(Cell::Dead, u.cell(1, 2));
        assert_eq!(Cell::Dead, u.cell(3, 2));

        u.step();
        assert_eq!(Cell::Alive, u.cell(1, 2));
        assert_eq!(Cell::Alive, u.cell(2, 2));
        assert_eq!(Cell::Alive, u.cell(3, 2));
    }

    #[test]
    fn lonely_cell_dies_to_dead_not_empty() {
        let mut u = Universe::create(4, 4);
        u.toggle(1, 1);
        u.step();
        assert_eq!(Cell::Dead, u.cell(1, 1));
    }

    #[test]
    fn circular_neighbors_wrap_edges() {
        // Vertical blinker across the top/bottom seam.
        let mut u = Universe::create(7, 6);
        for (x, y) in [(2, 5), (2, 0), (2, 1)] {
            u.toggle(x, y);
        }
        u.step();
        assert_eq!(Cell::Alive, u.cell(1, 0));
        assert_eq!(Cell::Alive, u.cell(2, 0));
        assert_eq!(Cell::Alive, u.cell(3, 0));
        u.step();
        assert_eq!(Cell::Alive, u.cell(2, 5));
        assert_eq!(Cell::Alive, u.cell(2, 0));
        assert_eq!(Cell::Alive, u.cell(2, 1));
    }

    #[test]
    fn non_circular_edge_pattern_starves() {
        let mut u = Universe::create(6, 5);
        u.set_circular(false);
        // Corner-hugging column: without wraparound it never gets 3 neighbors.
        for (x, y) in [(0, 0), (0, 1), (0, 4)] {
            u.toggle(x, y);
        }
        u.step();
        for y in 0..5 {
            for x in 0..6 {
                assert_ne!(Cell::Alive, u.cell(x, y), "cell ({x},{y})");
            }
        }
    }

    #[test]
    fn randomize_respects_density_roughly() {
        let mut u = Universe::create(100, 100);
        u.randomize(Density::High);
        let alive = (0..100)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .filter(|&(x, y)| u.cell(x, y) == Cell::Alive)
            .count();
        // High is a 50% roll over 10k cells; allow a generous band.
        assert!(alive > 4000 && alive < 6000, "alive = {alive}");
    }
}
