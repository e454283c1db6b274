//! # dirstat
//!
//! A small CLI tool for reporting directory sizes and contents.
//!
//! The default invocation measures one or more directories (total size,
//! file count, folder count) with a human-readable summary; subcommands
//! list file or folder names inside a directory. Output can be switched
//! to a single JSON document for scripting.
//!
//! ## Usage
//!
//! ```bash
//! # Basic usage - measure the current directory
//! dirstat
//!
//! # Measure several directories, largest first, hiding small ones
//! dirstat ~/Videos ~/Downloads --sort size --min-size 100MB
//!
//! # List .mkv files without their extension
//! dirstat files ~/Videos -e mkv --trim-extension
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use dirstat::{
    config::FileConfig,
    filtering::{filter_reports, sort_reports},
    listing::{collect_files, collect_folders},
    output::JsonOutput,
    report::{DirReport, Reporter},
    utils::format_size,
};
use std::process::exit;

use cli::{Cli, Commands, ConfigCommand};

/// Entry point for the dirstat application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and
/// printing any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Dispatches subcommands (`files`, `folders`, `config`) and otherwise runs
/// the report pipeline: resolve options, measure directories, filter, sort,
/// and print.
///
/// # Errors
///
/// Returns errors from thread-pool configuration, file-system operations,
/// or JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);

    match &args.subcommand {
        Some(Commands::Files {
            dir,
            extension,
            trim_extension,
            recursive,
        }) => {
            let files = collect_files(dir, extension.as_deref(), *recursive, *trim_extension);
            return print_names("files", files, json_mode);
        }
        Some(Commands::Folders { dir }) => {
            let folders = collect_folders(dir);
            return print_names("folders", folders, json_mode);
        }
        _ => {}
    }

    let dirs = args.directories(&file_config);
    let scan_options = args.scan_options(&file_config);
    let filter_options = args.filter_options(&file_config);
    let sort_options = args.sort_options(&file_config);

    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    let reporter = Reporter::new(scan_options).with_quiet(json_mode);
    let reports = reporter.report(&dirs);

    let mut filtered_reports = filter_reports(reports, &filter_options);
    sort_reports(&mut filtered_reports, &sort_options);

    if filtered_reports.is_empty() {
        return print_empty_result(json_mode, "✨ No directories match the specified criteria!");
    }

    print_reports(&filtered_reports, json_mode)
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# dirstat configuration
# All values shown are their defaults. Uncomment and change as needed.

# Default directory to report on (defaults to current directory when not set)
# dir = "."

# Multiple default directories (takes priority over `dir`)
# dirs = ["~/Videos", "~/Downloads"]

[filtering]
# Hide directories smaller than this (e.g. "50MB", "1GiB")
# min_size = "0"

# Sort output by: size, age, name
# sort = "size"

# Reverse the sort order
# reverse = false

[scanning]
# Recurse into subdirectories
# recursive = true

# Directory names to skip during scanning
# skip = []

# Maximum directory depth to scan (unset = unlimited)
# max_depth = 5

# Number of threads to use for measuring (0 = all CPU cores)
# threads = 0

# Show access errors encountered during scanning
# verbose = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_paths(val: Option<&[std::path::PathBuf]>) -> String {
        match val {
            Some(v) if !v.is_empty() => {
                let items: Vec<String> = v.iter().map(|p| format!("\"{}\"", p.display())).collect();
                format!("[{}]", items.join(", "))
            }
            _ => "[]  (default)".to_string(),
        }
    }

    let dir_str = config.dir.as_ref().map_or_else(
        || "\".\"  (default)".to_string(),
        |p| format!("\"{}\"", p.display()),
    );

    format!(
        "\
dir           = {dir}

[filtering]
min_size      = {min_size}
sort          = {sort}
reverse       = {reverse}

[scanning]
recursive     = {recursive}
skip          = {skip}
max_depth     = {max_depth}
threads       = {threads}
verbose       = {verbose}",
        dir = dir_str,
        min_size = show_str(config.filtering.min_size.as_deref(), "0"),
        sort = config
            .filtering
            .sort
            .as_deref()
            .map_or_else(|| "(none)  (default)".to_string(), |v| format!("\"{v}\"")),
        reverse = show_bool(config.filtering.reverse, false),
        recursive = show_bool(config.scanning.recursive, true),
        skip = show_paths(config.scanning.skip.as_deref()),
        max_depth = config
            .scanning
            .max_depth
            .map_or_else(|| "(unlimited)  (default)".to_string(), |v| v.to_string()),
        threads = show_usize(config.scanning.threads, "0 (all cores)"),
        verbose = show_bool(config.scanning.verbose, false),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}

// ── Output helpers ───────────────────────────────────────────────────

/// Emit an empty-result message in JSON or human-readable form.
fn print_empty_result(json_mode: bool, message: &str) -> Result<()> {
    if json_mode {
        let output = JsonOutput::from_reports(&[]);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", message.green());
    }
    Ok(())
}

/// Print a name listing (`files`/`folders` mode) in JSON or plain form.
fn print_names(mode: &str, names: Vec<String>, json_mode: bool) -> Result<()> {
    if json_mode {
        let output = JsonOutput::from_names(mode, names);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if names.is_empty() {
        println!("{}", format!("✨ No {mode} found!").green());
    } else {
        for name in &names {
            println!("{name}");
        }
        println!("\n{}", format!("{} {mode}", names.len()).bold());
    }
    Ok(())
}

/// Print the directory report in JSON or human-readable form.
fn print_reports(reports: &[DirReport], json_mode: bool) -> Result<()> {
    if json_mode {
        let output = JsonOutput::from_reports(reports);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n{}", "📊 Directory report:".bold());
    for report in reports {
        println!(
            "  {} {} ({} files, {} folders)",
            format!("{:>12}", format_size(report.size)).cyan(),
            report.path.display(),
            report.file_count,
            report.folder_count,
        );
    }

    let total_size: u64 = reports.iter().map(|r| r.size).sum();
    println!(
        "\n{} {}",
        "Total:".bold(),
        format_size(total_size).bright_white().bold()
    );

    Ok(())
}
