//! AlgoJudge Dashboard - Application Entry Point
//!
//! Mounts the admin dashboard once and prints it to the terminal.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algojudge_dashboard::{
    client::HttpDashboardSource,
    config::{ChartFormat, Config},
    notify::ConsoleNotifier,
    render::{ChartRenderer, DashboardView, JsonChartRenderer, TextChartRenderer},
    DashboardLoader, LoadOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!(endpoint = %config.api.endpoint_url(), "Loading admin dashboard...");

    let source = HttpDashboardSource::new(&config.api)?;
    let loader = DashboardLoader::new(source, ConsoleNotifier);

    let mut view = DashboardView::mount();
    let outcome = view.activate(&loader, &config.api.token).await;

    let renderer: Box<dyn ChartRenderer> = match config.view.chart_format {
        ChartFormat::Text => Box::new(TextChartRenderer::new(config.view.chart_width)),
        ChartFormat::Json => Box::new(JsonChartRenderer { pretty: true }),
    };
    print!("{}", view.render(&renderer));

    if let Some(LoadOutcome::Failed(kind)) = outcome {
        tracing::warn!(?kind, "Dashboard shown with default values");
        std::process::exit(1);
    }

    Ok(())
}
