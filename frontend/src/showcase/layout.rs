/// Breakpoints and gap range for the two-column showcase grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub min_width: f64,
    pub max_width: f64,
    pub min_gap: f64,
    pub max_gap: f64,
    /// Extra gap per pixel once the container is wider than `max_width`.
    pub growth_per_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_width: 1024.0,
            max_width: 1456.0,
            min_gap: 60.0,
            max_gap: 86.0,
            growth_per_px: 0.06018,
        }
    }
}

/// Gap in pixels between the image and the text column.
pub fn gap_px(width: f64, config: &LayoutConfig) -> f64 {
    if width <= config.min_width {
        return config.min_gap;
    }
    if width >= config.max_width {
        return config
            .min_gap
            .max(config.max_gap + config.growth_per_px * (width - config.max_width));
    }
    let progress = (width - config.min_width) / (config.max_width - config.min_width);
    config.min_gap + (config.max_gap - config.min_gap) * progress
}

pub fn is_single_column(width: f64, config: &LayoutConfig) -> bool {
    width < config.min_width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn reference_points() {
        let config = LayoutConfig::default();
        assert!(close(gap_px(1024.0, &config), 60.0));
        assert!(close(gap_px(1456.0, &config), 86.0));
        assert!(close(gap_px(1240.0, &config), 73.0));
        assert!(gap_px(2000.0, &config) > 86.0);
    }

    #[test]
    fn narrow_widths_clamp_to_min_gap() {
        let config = LayoutConfig::default();
        assert!(close(gap_px(0.0, &config), 60.0));
        assert!(close(gap_px(700.0, &config), 60.0));
    }

    #[test]
    fn gap_is_monotonic() {
        let config = LayoutConfig::default();
        let mut last = gap_px(0.0, &config);
        for width in (0..3000).step_by(25) {
            let gap = gap_px(width as f64, &config);
            assert!(gap >= last, "gap shrank at {}", width);
            last = gap;
        }
    }

    #[test]
    fn breakpoint_switches_to_single_column() {
        let config = LayoutConfig::default();
        assert!(is_single_column(1023.0, &config));
        assert!(!is_single_column(1024.0, &config));
        assert!(is_single_column(0.0, &config));
    }

    #[test]
    fn custom_constants_are_respected() {
        let config = LayoutConfig {
            min_width: 600.0,
            max_width: 800.0,
            min_gap: 10.0,
            max_gap: 30.0,
            growth_per_px: 0.0,
        };
        assert!(close(gap_px(700.0, &config), 20.0));
        assert!(close(gap_px(5000.0, &config), 30.0));
    }
}
