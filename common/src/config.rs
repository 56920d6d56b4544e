use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument, warn};

// site configuration
//
// all of the tunables used by the feature initializers.  a page may override any subset of
// them with an inline json document (see read_config); anything left out keeps the default
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    // typing effect
    pub typing_text: String,
    pub typing_delay_ms: u32,

    // quote rotator
    pub quotes: Vec<String>,
    pub quote_period_ms: u32,

    // toasts
    pub welcome_toast: Option<String>,
    pub welcome_delay_ms: u32,
    pub toast_duration_ms: u32,

    // sliders
    pub slide_period_ms: u32,

    // particle background
    pub particle_count: usize,

    // counters
    pub counter_steps: f64,
    pub counter_tick_ms: u32,

    // scroll behavior
    pub stagger_step_ms: u32,
    pub anchor_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            typing_text: String::from("Welcome to our Portfolio"),
            typing_delay_ms: 100,
            quotes: vec![
                String::from("Code is like humor. When you have to explain it, it’s bad."),
                String::from("Programs must be written for people to read."),
                String::from("Simplicity is the soul of efficiency."),
                String::from("Innovation distinguishes between a leader and a follower."),
                String::from("First, solve the problem. Then, write the code."),
            ],
            quote_period_ms: 10_000,
            welcome_toast: Some(String::from("Welcome to Group-2 Portfolio!")),
            welcome_delay_ms: 1500,
            toast_duration_ms: 4000,
            slide_period_ms: 4000,
            particle_count: 100,
            counter_steps: 100.0,
            counter_tick_ms: 30,
            stagger_step_ms: 150,
            anchor_offset: 80.0,
        }
    }
}

pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = serde_json::from_str(doc)?;

    if config.counter_steps <= 0.0 {
        return Err(anyhow::Error::msg("counter_steps must be positive"));
    }

    Ok(config)
}

// unlike the server config, a broken document is not fatal here: the page still works with
// the defaults, so we log and move on
#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: Option<&str>) -> SiteConfig {
    let Some(doc) = doc.map(str::trim).filter(|d| !d.is_empty()) else {
        debug!("no inline site config, using defaults");
        return SiteConfig::default();
    };

    match parse_config(doc) {
        Ok(config) => {
            debug!("successfully parsed inline site config");
            config
        }
        Err(err) => {
            warn!("failed to parse inline site config, using defaults: {err}");
            SiteConfig::default()
        }
    }
}
