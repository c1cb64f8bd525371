use raylib::color::Color;

pub const WINDOW_WIDTH: i32 = 1280;            // Default window width (pixels)
pub const WINDOW_HEIGHT: i32 = 800;            // Default window height (pixels)
pub const FPS: u32 = 60;                       // Frames per second

pub const SLIDE_INTERVAL_SECS: f32 = 5.0;      // Time between automatic slide advances (seconds)
pub const SWIPE_THRESHOLD_PX: f32 = 75.0;      // Horizontal drag that counts as a swipe (pixels)

pub const CROSSFADE_DURATION: f32 = 1.2;       // Hero slide crossfade (seconds)
pub const REDUCED_MOTION_FADE: f32 = 0.15;     // Crossfade under reduced motion (seconds)
pub const TEXT_STAGGER_STEP: f32 = 0.2;        // Delay between hero text entrances (seconds)
pub const TEXT_FADE_DURATION: f32 = 0.8;       // Each hero text entrance (seconds)
pub const REVEAL_DURATION: f32 = 0.6;          // Section entrance animation (seconds)

pub const WHEEL_STEP: f32 = 90.0;              // Scroll distance per wheel notch (pixels)
pub const SCROLL_EASE: f32 = 8.0;              // Smooth-scroll easing factor (per second)
pub const NAV_HEIGHT: f32 = 64.0;              // Navigation bar height (pixels)
pub const NAV_SOLID_AFTER: f32 = 50.0;         // Scroll depth where the nav bar turns opaque
pub const BACK_TO_TOP_AFTER: f32 = 300.0;      // Scroll depth where the back-to-top button appears
pub const ACTIVE_SECTION_PROBE: f32 = 100.0;   // Viewport line used to pick the active nav link
pub const REVEAL_MARGIN: f32 = 100.0;          // How far into the viewport a section must be to reveal

pub const PARTICLE_COUNT: usize = 20;          // Ambient hero particles
pub const PARTICLE_RADIUS: f32 = 3.0;

// Palette, roughly the original royal-and-gold theme on a dark ground.
pub const BACKGROUND: Color = Color { r: 16, g: 13, b: 27, a: 255 };
pub const PANEL: Color = Color { r: 30, g: 25, b: 48, a: 255 };
pub const PANEL_BORDER: Color = Color { r: 58, g: 48, b: 86, a: 255 };
pub const ROYAL: Color = Color { r: 112, g: 78, b: 190, a: 255 };
pub const GOLD: Color = Color { r: 212, g: 175, b: 85, a: 255 };
pub const TEXT_PRIMARY: Color = Color { r: 236, g: 233, b: 245, a: 255 };
pub const TEXT_MUTED: Color = Color { r: 160, g: 155, b: 178, a: 255 };
