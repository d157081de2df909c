use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use svlcheck_core::batch::{BatchEvent, ReportPolicy, run_batch};
use svlcheck_core::report::render;
use svlcheck_core::rules::shebangs::KnownShebangs;
use svlcheck_core::CheckConfig;

mod args;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only diagnostics.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = args::Args::parse();

    let mut known_shebangs = KnownShebangs::default();
    for line in args.shebang_lines() {
        known_shebangs.add_line(line);
    }
    for pattern in &args.shebang_patterns {
        known_shebangs
            .add_pattern(pattern)
            .with_context(|| format!("invalid --shebang-regex pattern {pattern:?}"))?;
    }

    let config = CheckConfig {
        known_shebangs,
        exec_bit: args.exec_bit_source(),
    };
    let policy = ReportPolicy {
        verbose: args.verbose,
        notices: args.notice,
    };

    let mut render_err = None;
    let summary = run_batch(&args.paths, &config, policy, |event| {
        let line = match (event, args.format) {
            (BatchEvent::Diagnostic(d), args::OutputFormat::Text) => render::render_text(d),
            (BatchEvent::Diagnostic(d), args::OutputFormat::Json) => {
                match render::render_json(d) {
                    Ok(line) => line,
                    Err(e) => {
                        render_err.get_or_insert(e);
                        return;
                    }
                }
            }
            (BatchEvent::Failure(path, err), args::OutputFormat::Text) => {
                render::render_failure(path, err)
            }
            (BatchEvent::Failure(path, err), args::OutputFormat::Json) => serde_json::json!({
                "path": path,
                "level": "ERROR",
                "error": err.to_string(),
            })
            .to_string(),
        };
        println!("{line}");
    })
    .context("exec bit metadata query failed")?;

    if let Some(e) = render_err {
        return Err(e).context("failed to render diagnostic as JSON");
    }

    std::process::exit(summary.exit_code());
}
