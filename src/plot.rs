use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::extract::UvCoverage;
use crate::utils::{symmetric_limit, DynError};

const PLOT_FONT_SCALE: f64 = 1.2;
const MARKER_SIZE: i32 = 2;

pub const TITLE: &str = "Visibility";
pub const X_LABEL: &str = "U";
pub const Y_LABEL: &str = "V";

fn scaled_font_size(base: i32) -> i32 {
    ((base as f64) * PLOT_FONT_SCALE).round() as i32
}

fn scaled_area_size(base: i32) -> i32 {
    ((base as f64) * PLOT_FONT_SCALE).round() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// `.svg` selects the vector backend; every other extension goes to the
    /// bitmap backend.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

/// A figure bound to one output image. Constructing it fixes the backend and
/// size; `present` draws the coverage and closes the figure.
#[derive(Debug)]
pub struct UvFigure {
    path: PathBuf,
    size: (u32, u32),
    format: ImageFormat,
}

impl UvFigure {
    pub fn new<P: AsRef<Path>>(path: P, size: (u32, u32)) -> Result<Self, DynError> {
        if size.0 == 0 || size.1 == 0 {
            return Err(format!("Figure size must be positive, got {}x{}", size.0, size.1).into());
        }
        let path = path.as_ref().to_path_buf();
        let format = ImageFormat::from_path(&path);
        Ok(Self { path, size, format })
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn present(self, coverage: &UvCoverage) -> Result<PathBuf, DynError> {
        match self.format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
                draw_uv_coverage(&root, coverage)?;
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
                draw_uv_coverage(&root, coverage)?;
            }
        }
        Ok(self.path)
    }
}

/// Scatter of the measured `(U, V)` points in red and their conjugates
/// `(-U, -V)` in blue on shared, origin-centred axes.
pub fn draw_uv_coverage<DB>(
    root: &DrawingArea<DB, Shift>,
    coverage: &UvCoverage,
) -> Result<(), DynError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let limit = symmetric_limit(coverage.u(), coverage.v());
    let mut chart = ChartBuilder::on(root)
        .caption(TITLE, ("sans-serif", scaled_font_size(28)).into_font())
        .margin(10)
        .x_label_area_size(scaled_area_size(40))
        .y_label_area_size(scaled_area_size(60))
        .build_cartesian_2d(-limit..limit, -limit..limit)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .label_style(("sans-serif", scaled_font_size(20)).into_font())
        .axis_desc_style(("sans-serif", scaled_font_size(24)).into_font())
        .light_line_style(WHITE.mix(0.0))
        .draw()?;

    chart
        .draw_series(
            coverage
                .points()
                .map(|point| Circle::new(point, MARKER_SIZE, RED.filled())),
        )?
        .label("(U, V)")
        .legend(|(x, y)| Circle::new((x, y), 4, RED.filled()));

    chart
        .draw_series(
            coverage
                .conjugate_points()
                .map(|point| Circle::new(point, MARKER_SIZE, BLUE.filled())),
        )?
        .label("(-U, -V)")
        .legend(|(x, y)| Circle::new((x, y), 4, BLUE.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(("sans-serif", scaled_font_size(20)).into_font())
        .draw()?;

    root.present()?;
    Ok(())
}
