use anyhow::{Context, Result};
use rdsviz::judge::catalog;
use rdsviz::judge::{ExecutionBackend, Severity, Submission};
use rdsviz::{HeuristicBackend, JudgeReport, Language};
use std::env;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Config {
    problem_id: Option<String>,
    language: Option<Language>,
    file: Option<String>,
    seed: Option<u64>,
    list: bool,
    json: bool,
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-problem" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-problem requires a problem id");
                }
                config.problem_id = Some(args[i].clone());
            }
            "-lang" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-lang requires one of java, cpp, python");
                }
                config.language = Some(args[i].parse()?);
            }
            "-file" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-file requires a file path argument");
                }
                config.file = Some(args[i].clone());
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = Some(
                    args[i]
                        .parse()
                        .with_context(|| format!("Invalid seed: {}", args[i]))?,
                );
            }
            "-list" => {
                config.list = true;
            }
            "-json" => {
                config.json = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Practice Problem Judge");
    println!("Usage: dsviz-judge [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -problem <ID>          Problem to judge (default: first in catalog)");
    println!("  -lang <LANG>           java, cpp or python (default: from file extension, else python)");
    println!("  -file <PATH>           Solution source (default: the problem's starter code)");
    println!("  -seed <N>              Seed for reproducible outcomes");
    println!("  -list                  List the problem catalog and exit");
    println!("  -json                  Print the report as JSON");
    println!("  -h, -help              Show this help message");
    println!();
    println!("Outcomes are simulated from keyword rules. No code is compiled or run.");
    println!();
    println!("EXAMPLES:");
    println!("  dsviz-judge -list");
    println!("  dsviz-judge -problem two-sum -file two_sum.py");
    println!("  dsviz-judge -problem binary-search -lang java -file Solution.java -seed 7");
}

fn print_catalog() -> Result<()> {
    for problem in catalog::problems()? {
        println!(
            "{:<28} {:<7} {} ({} visible, {} hidden cases)",
            problem.id,
            problem.difficulty.label(),
            problem.title,
            problem.visible_cases().count(),
            problem.hidden_count()
        );
    }
    Ok(())
}

/// Language from `-lang`, else the file extension, else the default.
fn resolve_language(config: &Config) -> Language {
    config
        .language
        .or_else(|| {
            config
                .file
                .as_deref()
                .and_then(|f| Path::new(f).extension())
                .and_then(|ext| ext.to_str())
                .and_then(Language::from_extension)
        })
        .unwrap_or_default()
}

fn print_report(report: &JudgeReport) {
    println!("Problem:  {}", report.problem_id);
    println!("Language: {}", report.language);
    println!("Backend:  {}", report.backend);

    for diagnostic in &report.check.diagnostics {
        let tag = match diagnostic.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        println!("{tag}: {}", diagnostic.message);
    }

    if !report.cases.is_empty() {
        println!();
    }
    for (n, case) in report.visible().enumerate() {
        let mark = if case.passed { "PASS" } else { "FAIL" };
        println!("  [{mark}] case {}: {}", n + 1, case.input);
        if !case.passed {
            println!("         expected {}, got {}", case.expected, case.actual);
        }
    }
    let hidden: Vec<_> = report.hidden().collect();
    if !hidden.is_empty() {
        let passed = hidden.iter().filter(|c| c.passed).count();
        println!("  hidden cases: {passed}/{} passed", hidden.len());
    }

    println!();
    println!("Verdict: {} ({})", report.verdict.label(), report.summary());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = parse_args()?;

    if config.list {
        return print_catalog();
    }

    let problem = match &config.problem_id {
        Some(id) => catalog::find(id)?,
        None => catalog::first()?,
    };
    let language = resolve_language(&config);

    let code = match &config.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read solution file: {path}"))?,
        None => problem.starter(language).to_string(),
    };

    let submission = Submission {
        problem,
        language,
        code,
    };

    let mut backend = match config.seed {
        Some(seed) => HeuristicBackend::seeded(seed),
        None => HeuristicBackend::new(),
    };
    let report = backend.judge(&submission);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
