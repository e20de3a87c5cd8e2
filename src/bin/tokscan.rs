//! Code Token Calculator CLI (tokscan) - Main binary entry point

use std::process;
use tokscan::ScanRequest;
use tokscan::cli::args::parse_args;
use tokscan::cli::output::{self, SortBy};
use tokscan::services::tokenizer::Cl100kCounter;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug tokscan "\.py$" /path
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(2);
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args[1..]) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    // Tokenizer initialization is fatal to the whole process, not per-file.
    let counter = match Cl100kCounter::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: failed to initialize tokenizer: {e}");
            process::exit(4);
        }
    };

    let mut request = ScanRequest::new(cli_args.directory.as_str(), cli_args.pattern.as_str());
    request.add_exclude_dirs(&cli_args.exclude_dirs);
    request.add_exclude_extensions(&cli_args.exclude_extensions);

    if !cli_args.json {
        eprintln!("Scanning: {}", cli_args.directory);
    }

    let report = tokscan::scan_report(&request, &counter);

    let sort_by = if cli_args.sort_by_tokens {
        SortBy::Tokens
    } else {
        SortBy::Path
    };

    let rendered = if cli_args.json {
        output::format_json(&report)
    } else {
        output::format_text(&report, sort_by, cli_args.show_skipped)
    };
    println!("{rendered}");

    if let Some(output_file) = &cli_args.output_file {
        // The saved report is always the text rendering, even with --json.
        let text = output::format_text(&report, sort_by, cli_args.show_skipped);
        if let Err(e) = output::save_report(output_file, &text) {
            eprintln!("Error: failed to save report to '{output_file}': {e}");
            process::exit(4);
        }
        if !cli_args.json {
            eprintln!("Report saved to: {output_file}");
        }
    }

    // General errors fail the run; per-file skips and errors do not.
    if report.is_failed() {
        process::exit(2);
    }
}

fn print_help() {
    println!("Code Token Calculator (tokscan) - Count LLM input tokens for files in a directory");
    println!();
    println!("USAGE:");
    println!("    tokscan <PATTERN> [DIRECTORY] [OPTIONS]");
    println!();
    println!("ARGS:");
    println!("    PATTERN                      Regex matched against relative file paths (required)");
    println!("    DIRECTORY                    Directory to scan (default: current directory)");
    println!();
    println!("OPTIONS:");
    println!("    --exclude-extensions <LIST>  Comma-separated extensions to exclude (e.g. .log,.tmp)");
    println!("    --exclude-dirs <LIST>        Comma-separated directory names, merged with defaults");
    println!("    --sort-by-tokens             Sort the detail list by token count (descending)");
    println!("    --show-skipped               Include skipped/errored files in the detail list");
    println!("    --json                       Emit machine-readable output");
    println!("    -o, --output-file <FILE>     Save the text report to a file");
    println!("    -h, --help                   Show this help message");
    println!("    -v, --version                Show version information");
    println!();
    println!("DEFAULT EXCLUDED DIRECTORIES:");
    println!("    .git, __pycache__, node_modules, .vscode, .idea, build, dist, env, venv,");
    println!("    .venv, target");
    println!();
    println!("EXAMPLES:");
    println!("    tokscan \"\\.py$\"                          # Python files under the current directory");
    println!("    tokscan \"\\.(py|cpp|h)$\" ./src --show-skipped");
    println!("    tokscan \"^src/api/.*\\.js$\" --sort-by-tokens -o report.txt");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("tokscan {VERSION}");
    println!("Tokenizer: cl100k_base");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
