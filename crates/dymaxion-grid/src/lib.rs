//! Dymaxion discrete global grid: an icosahedral net of ten squares mapping
//! sphere positions to dense memory ids, with neighbor topology and dual-cell
//! geometry for stencil computations.

mod arrow;
mod cache;
mod decimation;
mod error;
mod grid;
mod indexing;
mod interleaving;
mod point;
mod projection;
mod seam;
pub mod series;
mod squares;
mod triangles;
mod voronoi;

pub use arrow::{ARROWS_PER_VERTEX, ArrowDirection};
pub use cache::GridCache;
pub use decimation::VertexDownsamplingIds;
pub use error::GridError;
pub use grid::{Grid, VertexMetrics};
pub use indexing::Indexing;
pub use interleaving::Interleaving;
pub use point::{IdPoint, Point, ScalarPoint};
pub use projection::Projection;
pub use seam::SeamCrossing;
pub use series::VertexSeries;
pub use squares::{SQUARE_COUNT, Squares};
pub use triangles::{TRIANGLE_COUNT, Triangles};
pub use voronoi::Voronoi;
