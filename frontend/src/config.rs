use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Viewports at or below this width get the mobile tab-switch timings.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const HEADER_HEIGHT_PX: f64 = 80.0;

pub const SLIDER_PADDING_PX: i32 = 20;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const HERO_ENTRANCE_DELAY_MS: u32 = 100;
pub const MOBILE_LINK_STAGGER_MS: usize = 50;

pub const APP_STORE_URL: &str = "https://apps.apple.com/us/app/sonia-ai-voice-therapy/id6472111765";
pub const HERO_APP_STORE_URL: &str = "https://apps.apple.com/us/app/sonia-ai-emotional-support/id6472111765";

pub const JOBS_EMAIL: &str = "jobs@soniahealth.com";
pub const RESEARCH_EMAIL: &str = "research@soniahealth.com";
pub const INFO_EMAIL: &str = "info@soniahealth.com";

pub const PRIVACY_PATH: &str = "/privacy.html";
pub const TERMS_PATH: &str = "/terms.html";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/soniahealth";
pub const X_URL: &str = "https://x.com/soniahealth";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/soniahealth";

pub const SPLASH_LOGO: &str = "/logosoniacoconut.svg";
pub const BRAND_LOGO: &str = "/logosoniabora.svg";
pub const HEADER_LOGO: &str = "/sonia-logo-light.svg";
pub const YC_LOGO: &str = "/yclogo.svg";

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address)
}
