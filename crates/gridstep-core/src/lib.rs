//! **gridstep-core**: grid model for step-driven path searches.
//!
//! This crate provides the data the search engine works on: geometry
//! primitives, cells with occupancy and search scratch fields, and the
//! [`Grid`] holding them together with the start and goal.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Classification, Occupancy, Role};
pub use geom::{Bounds, Point, Points};
pub use grid::{Frame, FrameCell, Grid, GridError, compute_frame};
