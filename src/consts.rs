//! Default values for [`crate::config::FolioConfig`].

// ── Scroll ──────────────────────────────────────────────────────

/// Offset past which the nav switches to its opaque, shadowed look.
pub const NAV_SCROLLED_OFFSET_PX: f64 = 100.0;

/// Offset past which scrolling down hides the nav.
pub const NAV_HIDE_OFFSET_PX: f64 = 200.0;

/// Forward look applied to the scroll offset when matching sections, roughly
/// the nav bar's own height.
pub const ACTIVATION_LEAD_PX: f64 = 100.0;

/// Coalescing window for nav chrome, visibility and progress (one frame).
pub const FRAME_WINDOW_MS: f64 = 16.0;

/// Coalescing window for the section highlight scan.
pub const HIGHLIGHT_WINDOW_MS: f64 = 100.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of a target that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; the negative bottom edge waits until a target is
/// 50px inside the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Counter animation length.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// ── Peripherals ─────────────────────────────────────────────────

/// Toast lifetime before auto-dismiss.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Toasts kept on screen at once; older ones are evicted.
pub const TOAST_MAX_VISIBLE: usize = 3;

/// Simulated network latency for the contact form.
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// Width above which the mobile menu is force-closed.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Storage key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Minimum trimmed length of the contact name.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum trimmed length of the contact message.
pub const MESSAGE_MIN_CHARS: usize = 10;
