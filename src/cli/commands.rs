use knee_planner::adapters::display::AnalysisReport;
use knee_planner::adapters::http::app_router;
use knee_planner::application::{AnalyzeKneeCommand, AnalyzeKneeHandler};
use knee_planner::config::AppConfig;
use knee_planner::domain::foundation::Language;
use knee_planner::telemetry::{init_tracing, LogFormat};

use super::error::CliError;

/// Quiet by default on the command line; the report already carries warnings.
const CLI_LOG_DIRECTIVE: &str = "error";

pub fn analyze(
    mpta: String,
    ldfa: String,
    jlca: String,
    lang: Option<Language>,
    json: bool,
) -> Result<(), CliError> {
    let cmd = AnalyzeKneeCommand::from_text(&mpta, &ldfa, &jlca);
    run(cmd, lang, json)
}

pub fn demo(lang: Option<Language>, json: bool) -> Result<(), CliError> {
    run(AnalyzeKneeCommand::demo(), lang, json)
}

fn run(mut cmd: AnalyzeKneeCommand, lang: Option<Language>, json: bool) -> Result<(), CliError> {
    init_tracing(CLI_LOG_DIRECTIVE, LogFormat::Compact)?;

    let config = AppConfig::load()?;
    cmd.language = lang;
    let handler = AnalyzeKneeHandler::new(config.analysis.default_language);
    let result = handler.handle(cmd)?;

    println!("{}", render(&result.report, json)?);
    Ok(())
}

fn render(report: &AnalysisReport, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.render_text())
    }
}

pub fn serve() -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate()?;

    let format = if config.is_production() {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    init_tracing(&config.server.log_level, format)?;

    let bind_addr = config.server.socket_addr()?;
    let app = app_router(&config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(bind_addr).await?;
        tracing::info!(
            addr = %bind_addr,
            environment = ?config.server.environment,
            demo = config.features.enable_demo,
            "Knee planner API listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok::<(), CliError>(())
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_json_contains_strategy_code() {
        let result = AnalyzeKneeHandler::default()
            .handle(AnalyzeKneeCommand::demo())
            .unwrap();
        let json = render(&result.report, true).unwrap();
        assert!(json.contains("\"strategy\": \"gray_zone\""));
    }

    #[test]
    fn render_text_starts_with_decision() {
        let result = AnalyzeKneeHandler::default()
            .handle(AnalyzeKneeCommand::demo())
            .unwrap();
        let text = render(&result.report, false).unwrap();
        assert!(text.starts_with("Decision:"));
    }
}
