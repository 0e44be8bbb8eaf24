use clap::Parser;
use test_summary::cli::commands::{GateOutcome, cmd_report, cmd_summarize};
use test_summary::cli::config::{Cli, Commands, load_config};
use test_summary::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve the trace sink: CLI > config > off
    let tracer = match cli.trace.as_deref().or(config.trace.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Summarize {
            results_dir,
            baseline,
            format,
            output,
        } => {
            // Resolve settings: CLI > config > defaults
            let results_dir =
                results_dir.unwrap_or_else(|| config.summarize.results_dir.clone());
            let baseline = baseline.unwrap_or_else(|| config.summarize.baseline.clone());
            let format = format.or_else(|| config.summarize.format.clone());
            let output = output.or_else(|| config.summarize.output.clone());

            let outcome = cmd_summarize(
                &results_dir,
                &baseline,
                format.as_deref(),
                output.as_deref(),
                cli.verbose,
                &tracer,
            )?;
            if outcome == GateOutcome::Regression {
                std::process::exit(1);
            }
        }
        Commands::Report {
            summary,
            format,
            output,
        } => {
            let summary = summary.unwrap_or_else(|| config.report.summary.clone());
            let format = format.unwrap_or_else(|| config.report.format.clone());
            let output = output.or_else(|| config.report.output.clone());

            cmd_report(&summary, &format, output.as_deref(), cli.verbose)?;
        }
    }

    Ok(())
}
