//! Rosterdesk - composition root binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rosterdesk_client::ui::{LayoutMode, FIELD_COLLAPSE_BREAKPOINT};

/// Window width assumed when `ROSTERDESK_VIEWPORT_WIDTH` is not set.
const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rosterdesk_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rosterdesk");

    // Layout mode (wide vs collapsed field spans)
    // Prefer an explicit override; fall back to the viewport width.
    let layout = std::env::var("ROSTERDESK_LAYOUT")
        .ok()
        .and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
            "wide" => Some(LayoutMode::Wide),
            "narrow" => Some(LayoutMode::Narrow),
            _ => None,
        })
        .unwrap_or_else(|| {
            let width = std::env::var("ROSTERDESK_VIEWPORT_WIDTH")
                .ok()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
            LayoutMode::for_width(width, FIELD_COLLAPSE_BREAKPOINT)
        });

    let head = format!("<style>{}</style>", include_str!("../assets/style.css"));
    let cfg = dioxus_desktop::Config::new().with_custom_head(head);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(layout)
        .launch(rosterdesk_client::ui::app);
}
