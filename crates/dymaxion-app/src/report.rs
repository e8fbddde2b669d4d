//! Geometry report for a configured grid.

use dymaxion_config::Config;
use dymaxion_grid::{
    ARROWS_PER_VERTEX, Grid, GridCache, GridError, Indexing, VertexDownsamplingIds, VertexMetrics,
    series,
};

/// Spread of a per-vertex quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }
        (count > 0).then(|| Self {
            mean: sum / count as f64,
            min,
            max,
        })
    }

    /// The same summary divided through by `reference`.
    #[must_use]
    pub fn relative_to(self, reference: f64) -> Self {
        Self {
            mean: self.mean / reference,
            min: self.min / reference,
            max: self.max / reference,
        }
    }
}

/// Dual cell areas of every vertex.
pub fn dual_areas<M: VertexMetrics>(metrics: &M) -> Option<Summary> {
    Summary::of(series::vertex_dual_areas(metrics).iter())
}

/// Sine of latitude at every vertex, a smooth field for exercising the pyramid.
pub fn latitude_field<M: VertexMetrics>(metrics: &M) -> Vec<f64> {
    series::vertex_normals(metrics).iter().map(|n| n.z).collect()
}

/// Lengths of every arrow and of the dual edge it crosses.
pub fn arrow_lengths(grid: &Grid) -> (Option<Summary>, Option<Summary>) {
    let arrows = || {
        (0..grid.vertex_count())
            .flat_map(|v| (0..ARROWS_PER_VERTEX).map(move |offset| (v, offset)))
    };
    (
        Summary::of(arrows().map(|(v, offset)| grid.arrow_length(v, offset))),
        Summary::of(arrows().map(|(v, offset)| grid.arrow_dual_length(v, offset))),
    )
}

/// Build the configured grid and log its geometry and downsampling pyramid.
///
/// # Errors
///
/// Returns [`GridError`] if the grid or any pyramid level cannot be built.
pub fn run(config: &Config, vertices_per_square_side: i32) -> Result<(), GridError> {
    let grid = Grid::try_new(config.grid.radius, vertices_per_square_side)?;
    tracing::info!(
        radius = grid.radius(),
        vertices_per_square_side,
        vertices = grid.vertex_count(),
        arrows = grid.arrow_count(),
        "Building grid cache"
    );
    let cache = GridCache::new(grid);

    let expected_area = cache.total_area() / cache.vertex_count() as f64;
    if let Some(areas) = dual_areas(&cache) {
        let relative = areas.relative_to(expected_area);
        tracing::info!(
            mean = relative.mean,
            min = relative.min,
            max = relative.max,
            "Dual areas relative to total_area / vertex_count"
        );
    }

    let spacing = cache.total_circumference() / (2.0 * f64::from(cache.vertices_per_meridian()));
    let (lengths, dual_lengths) = arrow_lengths(cache.grid());
    if let (Some(lengths), Some(dual_lengths)) = (lengths, dual_lengths) {
        let lengths = lengths.relative_to(spacing);
        let dual_lengths = dual_lengths.relative_to(spacing);
        tracing::info!(
            min = lengths.min,
            max = lengths.max,
            dual_min = dual_lengths.min,
            dual_max = dual_lengths.max,
            "Arrow lengths relative to meridian spacing"
        );
    }

    let field = latitude_field(&cache);
    for &coarse_side in &config.pyramid.coarse_sides {
        let coarse_side =
            i32::try_from(coarse_side).map_err(|_| GridError::InvalidSide(i32::MAX))?;
        let coarse = Indexing::try_new(coarse_side)?;
        let ids = VertexDownsamplingIds::new(cache.indexing(), &coarse)?;
        let mut coarse_field = vec![0.0; coarse.vertex_count()];
        ids.downsample_mean(&field, &mut coarse_field);
        let mean = coarse_field.iter().sum::<f64>() / coarse_field.len() as f64;
        tracing::info!(
            coarse_side,
            factor = ids.factor(),
            vertices = coarse.vertex_count(),
            mean_sin_latitude = mean,
            "Downsampled latitude field"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_values() {
        let summary = Summary::of([1.0, 3.0, 2.0]).unwrap();
        assert_eq!(summary, Summary { mean: 2.0, min: 1.0, max: 3.0 });
        assert_eq!(summary.relative_to(2.0).max, 1.5);
        assert!(Summary::of(std::iter::empty()).is_none());
    }

    #[test]
    fn test_dual_areas_cover_the_sphere() {
        let grid = Grid::new(1.0, 6);
        let summary = dual_areas(&grid).unwrap();
        let total = summary.mean * grid.vertex_count() as f64;
        assert!((total - grid.total_area()).abs() / grid.total_area() < 0.05, "total {total}");
        assert!(summary.min > 0.0);
    }

    #[test]
    fn test_latitude_field_is_balanced() {
        let cache = GridCache::new(Grid::new(1.0, 8));
        let field = latitude_field(&cache);
        assert_eq!(field.len(), cache.vertex_count());
        let mean = field.iter().sum::<f64>() / field.len() as f64;
        assert!(mean.abs() < 1e-9, "mean sin(latitude) {mean}");
        assert!(field.iter().all(|z| (-1.0..=1.0).contains(z)));
    }

    #[test]
    fn test_arrow_lengths_are_positive() {
        let (lengths, dual_lengths) = arrow_lengths(&Grid::new(1.0, 4));
        assert!(lengths.unwrap().min > 0.0);
        assert!(dual_lengths.unwrap().min > 0.0);
    }

    #[test]
    fn test_run_rejects_incompatible_pyramid() {
        let mut config = Config::default();
        config.grid.vertices_per_square_side = 6;
        config.pyramid.coarse_sides = vec![3, 4];
        let err = run(&config, 6).unwrap_err();
        assert_eq!(err, GridError::IncompatibleResolutions { fine: 6, coarse: 4 });
    }

    #[test]
    fn test_run_succeeds_on_small_grid() {
        let mut config = Config::default();
        config.pyramid.coarse_sides = vec![2, 1];
        assert!(run(&config, 4).is_ok());
    }
}
