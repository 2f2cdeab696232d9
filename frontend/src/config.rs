/// Visibility fractions at which the About rail reports intersection changes.
pub const CAROUSEL_THRESHOLDS: [f64; 3] = [0.4, 0.6, 0.8];

/// Fraction of a section that must be visible before it fades in.
pub const REVEAL_AMOUNT: f64 = 0.25;

/// How long the contact form notice stays up, in milliseconds.
pub const NOTICE_TIMEOUT_MS: u32 = 6_000;

pub const SITE_NAME: &str = "LifetimeArt";
