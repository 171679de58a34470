use std::error::Error;
use std::path::{Path, PathBuf};

pub type DynError = Box<dyn Error + Send + Sync>;

const AXIS_PADDING: f64 = 1.05;
const DEFAULT_OUTPUT_SUFFIX: &str = "_uv.png";

/// Half-width of a square axis range centred on the origin that holds every
/// `(u, v)` point and its negation. Falls back to 1.0 when there is nothing
/// to bound.
pub fn symmetric_limit(u: &[f64], v: &[f64]) -> f64 {
    let max_abs = u
        .iter()
        .chain(v.iter())
        .map(|x| x.abs())
        .fold(0.0_f64, f64::max);
    if max_abs > 0.0 && max_abs.is_finite() {
        max_abs * AXIS_PADDING
    } else {
        1.0
    }
}

pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "uv_coverage".to_string());
    PathBuf::from(format!("{stem}{DEFAULT_OUTPUT_SUFFIX}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn symmetric_limit_covers_largest_magnitude_on_either_axis() {
        let limit = symmetric_limit(&[1.0, -4.0], &[2.0, 3.0]);
        assert_relative_eq!(limit, 4.0 * AXIS_PADDING);
    }

    #[test]
    fn symmetric_limit_falls_back_for_empty_or_origin_only_data() {
        assert_relative_eq!(symmetric_limit(&[], &[]), 1.0);
        assert_relative_eq!(symmetric_limit(&[0.0], &[0.0]), 1.0);
    }

    #[test]
    fn default_output_path_uses_resource_name() {
        assert_eq!(
            default_output_path(Path::new("/data/obs/WSRT_LFFE.ms/")),
            PathBuf::from("WSRT_LFFE.ms_uv.png")
        );
        assert_eq!(
            default_output_path(Path::new("/")),
            PathBuf::from("uv_coverage_uv.png")
        );
    }
}
