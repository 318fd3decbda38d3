//! Reports which instruction sets this host offers, which comparison
//! strategies run natively, and whether the startup self-test passes.
//!
//! Usage: `guidorder-probe [--json] [--verbose] [CONFIG.json]`

use colored::*;
use log::LevelFilter;
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use guidorder::capability::{self, CpuFeatures};
use guidorder::observability::init_logging;
use guidorder::selftest::{self, SelfTestReport};
use guidorder::{Comparator, GuidOrderConfig, GuidOrderError, Strategy};

struct Args {
    json: bool,
    verbose: bool,
    config_path: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut args = Args {
        json: false,
        verbose: false,
        config_path: None,
    };
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => args.json = true,
            "--verbose" | "-v" => args.verbose = true,
            _ => args.config_path = Some(PathBuf::from(arg)),
        }
    }
    args
}

#[derive(Serialize)]
struct ProbeReport {
    version: &'static str,
    features: CpuFeatures,
    selected: Strategy,
    self_test: SelfTestReport,
}

fn run(args: &Args) -> Result<ProbeReport, GuidOrderError> {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    init_logging(level, None)?;

    let config = match &args.config_path {
        Some(path) => GuidOrderConfig::from_json_file(path)?,
        None => GuidOrderConfig::default(),
    };
    let comparator = Comparator::from_config(&config)?;
    let self_test = selftest::run_all(config.exhaustive_self_test)?;

    Ok(ProbeReport {
        version: guidorder::VERSION,
        features: *capability::features(),
        selected: comparator.strategy(),
        self_test,
    })
}

fn flag(name: &str, present: bool) -> String {
    if present {
        format!("{} {}", "+".green(), name)
    } else {
        format!("{} {}", "-".red(), name.dimmed())
    }
}

fn print_report(report: &ProbeReport) {
    println!("{} {}", "guidorder".bold(), report.version);

    let f = &report.features;
    println!(
        "\n{}  {}  {}  {}  {}",
        "Hardware:".bold(),
        flag("SSE2", f.sse2),
        flag("SSSE3", f.ssse3),
        flag("AVX2", f.avx2),
        flag("NEON", f.neon)
    );

    println!("\n{}", "Strategies:".bold());
    for strategy in Strategy::ALL {
        let status = if report.self_test.native.contains(&strategy) {
            "native".green()
        } else {
            format!("fallback (needs {})", strategy.requirement()).yellow()
        };
        let marker = if strategy == report.selected { "*" } else { " " };
        println!("  {} {:<18} {}", marker.cyan(), strategy.name(), status);
    }

    println!(
        "\n{} {} pairs per strategy{}",
        "Self-test passed:".green().bold(),
        report.self_test.pairs_per_strategy,
        if report.self_test.exhaustive {
            " (exhaustive)"
        } else {
            ""
        }
    );
}

fn main() -> ExitCode {
    let args = parse_args();
    match run(&args) {
        Ok(report) => {
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("{} {}", "error:".red().bold(), e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
