// Visual tuning constants used by the web frontend only.
// Spatial/audio constants shared with the core live in `mixer_core::constants`.

// Background grid
pub const GRID_RINGS: usize = 8;
pub const GRID_SPOKES: usize = 12;
pub const GRID_RING_ALPHA_NEAR: f64 = 100.0 / 255.0;
pub const GRID_RING_ALPHA_FAR: f64 = 20.0 / 255.0;
pub const GRID_SPOKE_ALPHA: f64 = 30.0 / 255.0;
pub const GRID_LABEL_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

// Listener marker
pub const LISTENER_DOT_RADIUS: f64 = 10.0;
pub const LISTENER_RING_RADIUS: f64 = 15.0;

// Source drawing
pub const SHADOW_OFFSET: f64 = 5.0;
pub const SHADOW_SCALE: f64 = 1.1;
pub const INFLUENCE_SCALE: f64 = 3.0; // influence ring radius = base radius * 3 * volume
pub const INFLUENCE_RINGS: usize = 3;
pub const BODY_ALPHA_IDLE: f64 = 150.0 / 255.0;
pub const BODY_ALPHA_ACTIVE: f64 = 200.0 / 255.0;
pub const HANDLE_DRAW_RADIUS: f64 = 6.0;
pub const LABEL_NAME_OFFSET: f64 = 25.0;
pub const LABEL_VOLUME_OFFSET: f64 = 10.0;

// Panels and controls
pub const CORNER_RADIUS_SELECTOR: f64 = 10.0;
pub const CORNER_RADIUS_BUTTON: f64 = 15.0;
pub const HELP_PANEL: [f64; 4] = [10.0, 50.0, 270.0, 180.0]; // below the top-left selector
pub const INFO_PANEL_HEIGHT: f64 = 50.0;
pub const INFO_PANEL_WIDTH: f64 = 320.0;

pub const FONT_LABEL: &str = "14px sans-serif";
pub const FONT_SMALL: &str = "12px sans-serif";

pub const HELP_LINES: &[&str] = &[
    "Controls:",
    "- Drag a source: move it",
    "- Drag the yellow handle: change volume",
    "- Click a sound name box: next sound",
    "- H: toggle this help",
    "- S: save layout",
    "- L: load layout",
    "",
    "The centre point is the listener.",
];
