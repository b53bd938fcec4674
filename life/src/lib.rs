//! Interactive controller for a Game of Life grid: pattern stamping with
//! rotation, play/pause simulation driving, and incremental view
//! synchronization.
//!
//! The automaton itself sits behind the [`engine::GridEngine`] trait;
//! [`universe::Universe`] is the bundled reference implementation. All
//! per-grid state lives in a [`session::Session`], which exposes the entry
//! points a control surface invokes.

pub mod engine;
pub mod error;
pub mod labels;
pub mod pattern;
pub mod session;
pub mod sim;
pub mod universe;
pub mod view;

pub use engine::{Cell, Density, GridEngine};
pub use error::{CatalogError, SelectError};
pub use pattern::{Pattern, PatternCatalog, Rotation};
pub use session::Session;
pub use sim::SimState;
pub use universe::Universe;
pub use view::{CellPaint, ViewGrid};
