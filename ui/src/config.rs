//! Compile-time configuration for the landing page.
//!
//! Everything here is static: outbound links, the particle seed and the
//! capability thresholds. Nothing is read from the environment at runtime.

/// Outbound links shared by the navbar, hero, how-it-works and footer.
pub mod links {
    pub const DISCORD_INVITE: &str = "https://discord.com/oauth2/authorize?client_id=1005188427634966629&permissions=268528656&scope=bot+applications.commands";
    pub const GITHUB_REPO: &str = "https://github.com/MKGF/Ranky";
    pub const GITHUB_PROFILE: &str = "https://github.com/MKGF";
    pub const TWITTER: &str = "https://x.com/BotRanky";
    pub const PARTNER_SITE: &str = "https://www.Zennith.cl";
    pub const RIOT_LEGAL: &str = "https://www.riotgames.com/en/legal";
}

/// `localStorage` key (or file name on native) holding the last chosen locale.
pub const LOCALE_STORAGE_KEY: &str = "app:locale";

/// Seed for the decorative particle layout in the how-it-works section.
pub const PARTICLE_SEED: u32 = 20250814;
/// Number of decorative particles.
pub const PARTICLE_COUNT: usize = 16;

/// Minimum `navigator.deviceMemory` (GiB) for rich animation.
pub const MIN_DEVICE_MEMORY_GB: f64 = 4.0;
/// Core count must be strictly greater than this for rich animation.
pub const MIN_LOGICAL_CORES_EXCLUSIVE: u32 = 2;
/// Assumed when the browser does not expose `deviceMemory`.
pub const DEFAULT_DEVICE_MEMORY_GB: f64 = 8.0;
/// Assumed when the browser does not expose `hardwareConcurrency`.
pub const DEFAULT_LOGICAL_CORES: u32 = 4;

/// Navbar switches to its "scrolled" treatment past this offset.
pub const SCROLL_SHADOW_THRESHOLD_PX: f64 = 4.0;

/// Delay before the hero swaps its static background for the animated one.
pub const ANIMATED_BACKGROUND_DELAY_MS: u64 = 100;
