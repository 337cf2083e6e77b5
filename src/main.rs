//! CLI entry point for reposcribe

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use reposcribe::walk::classify;
use reposcribe::{
    PatternLoader, ScanReport, TreeWalker, print_report_json, write_export_file,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stderr is a TTY (status output goes there)
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "reposcribe")]
#[command(about = "Scribes a repository's non-ignored files into a single context file")]
#[command(version)]
struct Args {
    /// Project root directory to scribe
    project_dir: PathBuf,

    /// Output file path [default: ./output/{project_name}_context.txt]
    output_file: Option<PathBuf>,

    /// Skip the file tree block at the top of the output
    #[arg(long = "no-tree")]
    no_tree: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    yes: bool,

    /// Extra ignore pattern in gitignore syntax (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Print the files that would be scribed and exit without writing
    #[arg(long = "list")]
    list: bool,

    /// With --list, print the listing as JSON
    #[arg(long = "json", requires = "list")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Write a colored status line to stderr.
fn status(use_color: bool, color: Color, message: &str) {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color)));
    let _ = writeln!(stderr, "{}", message);
    let _ = stderr.reset();
}

/// Ask for confirmation on stdin. EOF or anything but y/yes declines.
fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);

    let root = classify::absolutize(&args.project_dir);

    // Resolve the output path up front so the loader can exclude it from
    // the scan. The default directory is only created if we get to writing.
    let (output_path, defaulted_output) = match &args.output_file {
        Some(path) => (classify::absolutize(path), false),
        None => {
            let project_name = root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "project".to_string());
            let dir = classify::absolutize(&PathBuf::from("output"));
            (dir.join(format!("{}_context.txt", project_name)), true)
        }
    };

    eprintln!("Scanning project directory: {}", root.display());

    let loader = PatternLoader::new().user_patterns(args.ignore.clone());
    let (patterns, mut warnings) = loader.load(&root, Some(&output_path));

    let result = match TreeWalker::new(&patterns).walk(&root) {
        Ok(result) => result,
        Err(err) => {
            status(use_color, Color::Red, &format!("Error: {}", err));
            process::exit(1);
        }
    };
    warnings.extend(result.warnings.iter().cloned());
    for warning in &warnings {
        status(use_color, Color::Yellow, &format!("Warning: {}", warning));
    }

    if result.files.is_empty() {
        status(
            use_color,
            Color::Yellow,
            "No files found to scribe (after applying ignore rules). Nothing to do.",
        );
        process::exit(0);
    }

    if args.list {
        if args.json {
            let report = ScanReport {
                root: root.display().to_string(),
                files: &result.files,
                directories: &result.directories,
            };
            if let Err(err) = print_report_json(&report) {
                status(use_color, Color::Red, &format!("Error: {}", err));
                process::exit(1);
            }
        } else {
            for file in &result.files {
                println!("{}", file);
            }
        }
        process::exit(0);
    }

    println!("\nThe following files will be scribed:");
    for file in &result.files {
        println!("  - {}", file);
    }
    println!("\nTotal files: {}", result.files.len());

    if !args.yes
        && !confirm(&format!(
            "Proceed with scribing to '{}'?",
            output_path.display()
        ))
    {
        println!("Scribing cancelled by user.");
        process::exit(0);
    }

    if defaulted_output {
        if let Some(parent) = output_path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                status(
                    use_color,
                    Color::Red,
                    &format!(
                        "Error: could not create output directory '{}': {}",
                        parent.display(),
                        err
                    ),
                );
                process::exit(1);
            }
        }
    }

    eprintln!("\nScribing files to {}...", output_path.display());
    match write_export_file(&output_path, &root, &result.files, !args.no_tree) {
        Ok(summary) => {
            status(
                use_color,
                Color::Green,
                &format!(
                    "\nSuccessfully scribed content of {} files.",
                    summary.file_count
                ),
            );
            println!(
                "Total approximate size: {:.2} KB",
                summary.content_bytes as f64 / 1024.0
            );
            println!("Output written to: {}", output_path.display());
        }
        Err(err) => {
            status(
                use_color,
                Color::Red,
                &format!(
                    "Error writing export file '{}': {}",
                    output_path.display(),
                    err
                ),
            );
            process::exit(1);
        }
    }
}
