// src/config/consts.rs

// Site
pub const SITE_NAME: &str = "UFC: Two Per Division";
pub const DEFAULT_ROOT: &str = ".";

// Layout under the site root
pub const FIGHTERS_SUBDIR: &str = "fighters";
pub const FIGHTER_IMG_SUBDIR: &str = "assets/img/fighters";
pub const DIVISION_IMG_SUBDIR: &str = "assets/img/divisions";
pub const IMAGE_EXT: &str = "webp";

// Fighter pages
pub const GALLERY_SLOTS: usize = 3;

// Division categories (id prefixes)
pub const MENS_PREFIX: &str = "mens-";
pub const WOMENS_PREFIX: &str = "womens-";

// Weight tiers, in lbs (inclusive)
pub const LIGHT_MAX_LBS: i64 = 145;
pub const MID_MIN_LBS: i64 = 146;
pub const MID_MAX_LBS: i64 = 185;
pub const HEAVY_MIN_LBS: i64 = 186;

// Browser UI
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 740px)";

// Logging
pub const LOG_FILE: &str = ".store/site.log";
pub const LOG_LEVEL_ENV: &str = "SITE_LOG";

// Placeholder artwork
pub const POSTER_SIZE: (u32, u32) = (640, 800);
pub const BANNER_SIZE: (u32, u32) = (1200, 480);
pub const PLACEHOLDER_SLUG: &str = "placeholder";
pub const ART_PALETTE: &[(&str, &str)] = &[
    ("#0ea5e9", "#0b1220"),
    ("#e11d48", "#121a2b"),
    ("#9333ea", "#111827"),
    ("#14b8a6", "#0b1220"),
    ("#f97316", "#121a2b"),
    ("#64748b", "#0b1220"),
];
