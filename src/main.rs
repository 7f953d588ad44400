use anyhow::Context;
use clap::Parser;
use direxists::core::checker::exit_with_diagnostic;
use direxists::core::report::{render, text_line};
use direxists::utils::logger;
use direxists::{
    CliConfig, LocalStorage, OutputFormat, PathExistenceChecker, ProbeOutcome, Prober, Settings,
};
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting direxists");
    tracing::debug!("CLI config: {:?}", config);

    // 合併並驗證配置
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with_diagnostic(&e),
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let prober = Prober::new(PathExistenceChecker::local(), settings.on_error);
    tracing::debug!(
        "Checking {} path(s) with {:?} policy",
        settings.paths.len(),
        prober.policy()
    );

    // 文字輸出到 stdout 時逐行印出，其餘格式先收集再輸出
    let outcomes = if settings.format == OutputFormat::Text && settings.output.is_none() {
        stream_text(&prober, &settings)
    } else {
        let outcomes = match prober.run(&settings.paths) {
            Ok(outcomes) => outcomes,
            Err(e) => exit_with_diagnostic(&e),
        };
        if let Err(e) = emit(&settings, &outcomes) {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
        outcomes
    };

    if outcomes.iter().any(ProbeOutcome::is_failed) {
        tracing::warn!("⚠️ Some paths could not be checked");
        std::process::exit(1);
    }
}

fn stream_text(prober: &Prober<direxists::LocalFs>, settings: &Settings) -> Vec<ProbeOutcome> {
    let mut outcomes = Vec::with_capacity(settings.paths.len());
    for path in &settings.paths {
        match prober.check(path) {
            Ok(outcome) => {
                println!("{}", text_line(&outcome));
                outcomes.push(outcome);
            }
            Err(e) => exit_with_diagnostic(&e),
        }
    }
    outcomes
}

fn emit(settings: &Settings, outcomes: &[ProbeOutcome]) -> anyhow::Result<()> {
    let rendered = render(outcomes, settings.format).context("Failed to render the report")?;

    match &settings.output {
        Some(path) => {
            let storage = LocalStorage::new(path);
            storage
                .write(rendered.as_bytes())
                .with_context(|| format!("Failed to write report to '{}'", path.display()))?;
            tracing::info!("📁 Report saved to: {}", storage.path().display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
