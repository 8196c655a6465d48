// Shared scene/interaction tuning constants used by the core and the web frontend.

// Open/close spring
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_TENSION: f32 = 120.0;
pub const SPRING_FRICTION: f32 = 30.0;
pub const SPRING_STEP_SEC: f32 = 0.001; // fixed integration sub-step
pub const SPRING_MAX_DT_SEC: f32 = 0.1; // larger frame gaps (hidden tab) are clamped
pub const SPRING_EPSILON: f32 = 1e-3; // position and velocity rest threshold

// Scene layout
pub const ROOT_TILT_DEG: f32 = -45.0; // whole model leans back about X
pub const TEXT_PADDING: f32 = 12.0; // inset of the text block from the panel's top-left corner
pub const TEXT_FACE_OFFSET: f32 = 0.05; // lift of the text group off the outward face
pub const TEXT_SURFACE_OFFSET: f32 = 0.01; // extra lift of the glyph quad inside the group

// Paper material
pub const PAPER_ROUGHNESS: f32 = 0.9;
pub const PAPER_METALNESS: f32 = 0.0;

// Edge outlines
pub const EDGE_STRONG_COLOR: &str = "#222222";
pub const EDGE_STRONG_THRESHOLD_DEG: f32 = 15.0;
pub const EDGE_FAINT_COLOR: &str = "#000000";
pub const EDGE_FAINT_OPACITY: f32 = 0.1;
pub const EDGE_FAINT_THRESHOLD_DEG: f32 = 20.0;

// Belt cap tessellation (segments along the half circle)
pub const BELT_CURVE_SEGMENTS: usize = 12;

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_DISTANCE: f32 = 450.0; // initial eye is (0, 0, CAMERA_DISTANCE)
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 5000.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending motion applied per update
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_PAN_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SCALE: f32 = 0.95; // radius factor per wheel notch
pub const ORBIT_MIN_POLAR: f32 = 0.0;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI;
pub const ORBIT_MIN_DISTANCE: f32 = 20.0;
pub const ORBIT_MAX_DISTANCE: f32 = 3000.0;

// Lighting
pub const BACKGROUND_COLOR: &str = "#f3f4f6";
pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const HEADLIGHT_INTENSITY: f32 = 1.5;

// Contact shadow
pub const SHADOW_Y: f32 = -120.0;
pub const SHADOW_OPACITY: f32 = 0.4;
pub const SHADOW_SCALE: f32 = 500.0;
pub const SHADOW_BLUR: f32 = 2.5; // softness of the falloff

// Typography slider ranges (min, max, step)
pub const FONT_SIZE_RANGE: (f32, f32, f32) = (2.0, 20.0, 0.5);
pub const LINE_HEIGHT_RANGE: (f32, f32, f32) = (0.8, 2.5, 0.1);
pub const LETTER_SPACING_RANGE: (f32, f32, f32) = (-0.1, 0.5, 0.01);
