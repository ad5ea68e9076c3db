//! RTL Codegen Binary
//!
//! Command line front end for the fileset lister and the register
//! programming script generator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rtl_codegen::config::{GeneratorConfig, ListingOrder};
use rtl_codegen::tools::{self, ToolCall};
use rtl_codegen::{FilesetLister, RegisterScriptGenerator};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rtl-codegen")]
#[command(about = "Generate Platform Designer fileset directives and register programming scripts")]
#[command(version)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print add_fileset_file directives for matching VHDL sources
    Fileset {
        /// Folder to scan
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Required filename suffix
        #[arg(long)]
        extension: Option<String>,

        /// Substring that excludes a file (repeatable, replaces the configured list)
        #[arg(long = "exclude", conflicts_with = "no_exclude")]
        excludes: Vec<String>,

        /// Clear the exclusion list
        #[arg(long)]
        no_exclude: bool,

        /// Substring that includes a file (repeatable, replaces the configured list)
        #[arg(long = "include")]
        includes: Vec<String>,

        /// Keep directory order instead of sorting
        #[arg(long)]
        unsorted: bool,

        /// Write directives to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate the register programming script
    RegisterScript {
        /// Number of registers
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Driver major number
        #[arg(short, long)]
        major: Option<u32>,

        /// Device class prefix, e.g. fe_DPRAM
        #[arg(long)]
        class_prefix: Option<String>,

        /// Coefficient file read by the script at runtime
        #[arg(short, long)]
        input: Option<String>,

        /// Path of the generated script
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base of the coefficient values
        #[arg(long)]
        radix: Option<u32>,

        /// Print the script instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Print the argument schemas of the tools accepted by `run`
    Tools,

    /// Execute a JSON array of tool calls
    Run {
        /// File holding [{"name": ..., "arguments": {...}}, ...]
        calls: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    match args.command {
        Command::Fileset {
            directory,
            extension,
            excludes,
            no_exclude,
            includes,
            unsorted,
            output,
        } => {
            let fileset = &mut config.fileset;
            if let Some(extension) = extension {
                fileset.extension = extension;
            }
            if no_exclude {
                fileset.excludes.clear();
            } else if !excludes.is_empty() {
                fileset.excludes = excludes;
            }
            if !includes.is_empty() {
                fileset.includes = includes;
            }
            if unsorted {
                fileset.order = ListingOrder::Directory;
            }
            fileset.validate()?;

            let directives = FilesetLister::from_config(fileset).generate(&directory)?;
            match output {
                Some(path) => std::fs::write(&path, &directives)
                    .context(format!("Failed to write fileset to: {}", path.display()))?,
                None => print!("{}", directives),
            }
        }
        Command::RegisterScript {
            count,
            major,
            class_prefix,
            input,
            output,
            radix,
            stdout,
        } => {
            let script = &mut config.register_script;
            if let Some(count) = count {
                script.register_count = count;
            }
            if let Some(major) = major {
                script.major_number = major;
            }
            if let Some(class_prefix) = class_prefix {
                script.class_prefix = class_prefix;
            }
            if let Some(input) = input {
                script.input_path = input;
            }
            if let Some(output) = output {
                script.output_path = output;
            }
            if let Some(radix) = radix {
                script.radix = radix;
            }

            let output_path = script.output_path.clone();
            let generator = RegisterScriptGenerator::new(script.clone())?;
            if stdout {
                print!("{}", generator.generate());
            } else {
                generator.write_to(&output_path)?;
            }
        }
        Command::Tools => {
            let executor = tools::default_executor(&config)?;
            println!("{}", serde_json::to_string_pretty(&executor.schemas())?);
        }
        Command::Run { calls } => {
            let content = std::fs::read_to_string(&calls)
                .context(format!("Failed to read tool calls: {}", calls.display()))?;
            let calls: Vec<ToolCall> = serde_json::from_str(&content)
                .context("Failed to parse tool calls")?;

            let executor = tools::default_executor(&config)?;
            let results: Vec<_> = calls.iter().map(|call| executor.execute(call)).collect();

            println!("{}", serde_json::to_string_pretty(&results)?);

            let failed = results.iter().filter(|r| !r.success).count();
            if failed > 0 {
                anyhow::bail!("{} of {} tool call(s) failed", failed, results.len());
            }
        }
    }

    Ok(())
}
