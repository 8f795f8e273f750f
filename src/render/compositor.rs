use super::projector::project;
use crate::config::VisualizationConfig;
use crate::geometry::Line;

/// How far outside the viewport a projected endpoint may land before the
/// line is dropped.
pub const CULL_MARGIN: f64 = 100.0;

/// One drawable stroke in screen space: white, round caps, alpha already
/// folded in. Clamping to [0, 1] is left to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeCmd {
    pub p1: (f64, f64),
    pub p2: (f64, f64),
    pub width: f32,
    pub opacity: f64,
}

/// Global brightness pulse shared by every line in a frame.
pub fn pulse_factor(time: f64) -> f64 {
    0.7 + 0.3 * (time / 1000.0).sin()
}

/// Turn a generated line field into stroke instructions: depth-sort
/// far-to-near (painter's algorithm), project, cull, modulate opacity.
/// Stateless; identical inputs give identical output.
pub fn compose_frame(
    mut lines: Vec<Line>,
    config: &VisualizationConfig,
    width: f64,
    height: f64,
    time: f64,
) -> Vec<StrokeCmd> {
    lines.sort_by(|a, b| a.mid_z().total_cmp(&b.mid_z()));

    let pulse = if config.pulse_effect {
        pulse_factor(time)
    } else {
        1.0
    };

    lines
        .into_iter()
        .filter_map(|line| {
            let p1 = project(line.start, config.perspective, width, height);
            let p2 = project(line.end, config.perspective, width, height);
            // Non-finite coordinates fail these range checks too.
            if !on_screen(p1, width, height) || !on_screen(p2, width, height) {
                return None;
            }
            Some(StrokeCmd {
                p1,
                p2,
                width: 1.0,
                opacity: line.opacity * config.line_opacity * pulse,
            })
        })
        .collect()
}

fn on_screen((x, y): (f64, f64), width: f64, height: f64) -> bool {
    x >= -CULL_MARGIN
        && x <= width + CULL_MARGIN
        && y >= -CULL_MARGIN
        && y <= height + CULL_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3D;

    fn line(z1: f64, z2: f64) -> Line {
        Line::new(
            Point3D::new(0.0, 0.0, z1),
            Point3D::new(10.0, 10.0, z2),
            0.5,
        )
    }

    fn test_config() -> VisualizationConfig {
        VisualizationConfig {
            pulse_effect: false,
            ..VisualizationConfig::default()
        }
    }

    #[test]
    fn test_sorts_far_to_near() {
        let lines = vec![line(10.0, 10.0), line(500.0, 500.0), line(-100.0, -100.0)];
        let strokes = compose_frame(lines, &test_config(), 640.0, 480.0, 0.0);
        assert_eq!(strokes.len(), 3);
        // Ascending depth order; deeper lines project closer to the
        // viewport center, so projected x decreases along the output.
        assert!(strokes[0].p2.0 > strokes[1].p2.0);
        assert!(strokes[1].p2.0 > strokes[2].p2.0);
    }

    #[test]
    fn test_keeps_lines_within_margin() {
        // Endpoints right at the margin edge survive.
        let l = Line::new(
            Point3D::new(-420.0, 0.0, 0.0),
            Point3D::new(420.0, 0.0, 0.0),
            1.0,
        );
        let strokes = compose_frame(vec![l], &test_config(), 640.0, 480.0, 0.0);
        assert_eq!(strokes.len(), 1);
    }

    #[test]
    fn test_culls_lines_outside_margin() {
        let l = Line::new(
            Point3D::new(-1000.0, 0.0, 0.0),
            Point3D::new(0.0, 0.0, 0.0),
            1.0,
        );
        assert!(compose_frame(vec![l], &test_config(), 640.0, 480.0, 0.0).is_empty());
    }

    #[test]
    fn test_culls_non_finite_projection() {
        // z = -perspective puts the endpoint on the projection singularity.
        let l = Line::new(
            Point3D::new(1.0, 1.0, -800.0),
            Point3D::new(0.0, 0.0, 0.0),
            1.0,
        );
        assert!(compose_frame(vec![l], &test_config(), 640.0, 480.0, 0.0).is_empty());

        let nan = Line::new(
            Point3D::new(f64::NAN, 0.0, 0.0),
            Point3D::new(0.0, 0.0, 0.0),
            1.0,
        );
        assert!(compose_frame(vec![nan], &test_config(), 640.0, 480.0, 0.0).is_empty());
    }

    #[test]
    fn test_zero_viewport_culls_everything_off_plane() {
        let l = Line::new(
            Point3D::new(200.0, 200.0, 0.0),
            Point3D::new(300.0, 300.0, 0.0),
            1.0,
        );
        assert!(compose_frame(vec![l], &test_config(), 0.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_opacity_modulation_without_pulse() {
        let strokes = compose_frame(vec![line(0.0, 0.0)], &test_config(), 640.0, 480.0, 0.0);
        // 0.5 intrinsic * 0.8 global, no pulse.
        assert!((strokes[0].opacity - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_pulse_factor_bounds() {
        for &time in &[0.0, 250.0, 1_570.8, 4_712.4, 99_999.0] {
            let p = pulse_factor(time);
            assert!((0.4..=1.0).contains(&p), "pulse {p} at {time}");
        }
    }

    #[test]
    fn test_pulse_applied_when_enabled() {
        let config = VisualizationConfig {
            pulse_effect: true,
            ..VisualizationConfig::default()
        };
        let time = 1_570.8; // sin near 1, pulse near 1.0
        let strokes = compose_frame(vec![line(0.0, 0.0)], &config, 640.0, 480.0, time);
        let expected = 0.5 * config.line_opacity * pulse_factor(time);
        assert!((strokes[0].opacity - expected).abs() < 1e-12);
    }

    #[test]
    fn test_stroke_width_is_one_pixel() {
        let strokes = compose_frame(vec![line(0.0, 0.0)], &test_config(), 640.0, 480.0, 0.0);
        assert_eq!(strokes[0].width, 1.0);
    }
}
