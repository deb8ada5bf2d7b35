// Shared spatial/audio tuning constants used by the core and the web frontend.

// Ring layout (listener-centred units, one unit per canvas pixel)
pub const INNER_RADIUS: f32 = 100.0; // closest a source may get to the listener
pub const OUTER_RADIUS: f32 = 400.0; // farthest a source may get from the listener
pub const START_RADIUS: f32 = 300.0; // radius of the initial placement

// Attenuation
pub const MAX_DISTANCE: f32 = 400.0; // matches OUTER_RADIUS; attenuation is e^-2 here
pub const PAN_SPAN: f32 = 400.0; // |x| at which pan saturates to full left/right
pub const VOLUME_FLOOR: f32 = 0.0001; // never send exact silence to the backend
pub const VOLUME_CEIL: f32 = 1.0;

// Manual ("visual") volume range
pub const MIN_MANUAL_VOLUME: f32 = 0.1;
pub const MAX_MANUAL_VOLUME: f32 = 2.0;
pub const DEFAULT_MANUAL_VOLUME: f32 = 1.0;

// Source sizing and picking
pub const BASE_RADIUS: f32 = 30.0; // drawn radius is BASE_RADIUS * (0.5 + manual volume)
pub const RADIUS_VOLUME_OFFSET: f32 = 0.5;
pub const HANDLE_HIT_RADIUS: f32 = 15.0; // resize handle pick distance

// Sound switching
pub const SOUND_FADE_OUT_SEC: f64 = 0.1;

// Default canvas size and screen-anchored controls
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1200.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 800.0;
pub const SELECTOR_WIDTH: f32 = 200.0;
pub const SELECTOR_HEIGHT: f32 = 40.0;
pub const BALANCE_BUTTON_WIDTH: f32 = 180.0;
pub const BALANCE_BUTTON_HEIGHT: f32 = 30.0;
pub const BALANCE_BUTTON_MARGIN: f32 = 20.0;
pub const RING_SELECTOR_RADIUS: f32 = 460.0; // selector ring sits just outside OUTER_RADIUS

pub const SOURCE_COUNT: usize = 4;

// Persistence
pub const STORAGE_KEY: &str = "audioConfig";

// Slot placement angles in screen space (y grows downward):
// slot 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
pub const SLOT_ANGLES: [f32; SOURCE_COUNT] = [
    -3.0 * std::f32::consts::FRAC_PI_4,
    -std::f32::consts::FRAC_PI_4,
    3.0 * std::f32::consts::FRAC_PI_4,
    std::f32::consts::FRAC_PI_4,
];

pub const DEFAULT_SOURCE_COLORS: [[u8; 3]; SOURCE_COUNT] = [
    [100, 200, 255], // sky
    [255, 100, 100], // coral
    [100, 255, 100], // leaf
    [255, 200, 0],   // amber
];
