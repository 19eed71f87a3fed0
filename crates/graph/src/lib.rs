//! Windowed sparkline geometry for the inspector.
//!
//! [`GraphMapper`] decides which trailing slice of a series fits a drawing
//! rect at a fixed column pitch and maps it to drawable points;
//! [`sparkline`] turns those points into a terminal block-character row.

pub mod mapper;
pub mod sparkline;

pub use mapper::{GraphMapper, Point, Rect};
