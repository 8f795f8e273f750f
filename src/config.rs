/// The five wireframe modes the generator layer knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualizationType {
    Tunnel,
    Grid,
    Polyhedron,
    Particles,
    HexGrid,
}

impl VisualizationType {
    pub const ALL: [VisualizationType; 5] = [
        VisualizationType::Tunnel,
        VisualizationType::Grid,
        VisualizationType::Polyhedron,
        VisualizationType::Particles,
        VisualizationType::HexGrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisualizationType::Tunnel => "Tunnel",
            VisualizationType::Grid => "Grid",
            VisualizationType::Polyhedron => "Polyhedron",
            VisualizationType::Particles => "Particles",
            VisualizationType::HexGrid => "Hex Grid",
        }
    }

    /// Parse a string tag. Unknown tags fall back to the tunnel mode so a
    /// stale or mistyped tag still renders something instead of a blank frame.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "grid" => VisualizationType::Grid,
            "polyhedron" => VisualizationType::Polyhedron,
            "particles" => VisualizationType::Particles,
            "hexGrid" => VisualizationType::HexGrid,
            _ => VisualizationType::Tunnel,
        }
    }
}

/// Everything the host can tune about a frame. Passed by value into the
/// render pipeline each tick; the core never mutates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualizationConfig {
    pub viz_type: VisualizationType,
    /// Multiplier folded into elapsed time before it reaches the generators.
    pub speed: f64,
    /// Rotation rate in radians per second of scaled time.
    pub rotation: f64,
    /// Focal distance for the pinhole projection; also used as scene depth.
    pub perspective: f64,
    pub line_count: i32,
    /// Global opacity multiplier applied on top of each line's own opacity.
    pub line_opacity: f64,
    pub pulse_effect: bool,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            viz_type: VisualizationType::Tunnel,
            speed: 5.0,
            rotation: 0.5,
            perspective: 800.0,
            line_count: 15,
            line_opacity: 0.8,
            pulse_effect: true,
        }
    }
}

/// Slider ranges for the control panel.
pub mod limits {
    pub const MIN_LINE_COUNT: i32 = 5;
    pub const MAX_LINE_COUNT: i32 = 30;

    pub const MIN_SPEED: f64 = 1.0;
    pub const MAX_SPEED: f64 = 10.0;

    pub const MIN_ROTATION: f64 = 0.0;
    pub const MAX_ROTATION: f64 = 2.0;

    pub const MIN_PERSPECTIVE: f64 = 200.0;
    pub const MAX_PERSPECTIVE: f64 = 1500.0;

    pub const MIN_LINE_OPACITY: f64 = 0.1;
    pub const MAX_LINE_OPACITY: f64 = 1.0;
}
