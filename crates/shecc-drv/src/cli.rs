//! Command-line surface (§10.4): the two in-scope toggles named in §6,
//! plus the ambient flags any crate in this style exposes. There are no
//! subcommands — a single invocation compiles one translation unit.

use clap::Parser;
use shecc_util::limits::Settings;
use std::path::PathBuf;

/// A demonstration driver for the two-phase IR pipeline.
///
/// This binary does not lex, parse free-form C-like source, or emit ELF
/// bytes — those remain out of scope. It constructs a
/// `CompilationContext`, runs the fixture program through the Phase-1 →
/// Phase-2 pipeline, and (with `--dump-ir`) prints the Phase-1 IR dump.
#[derive(Debug, Parser)]
#[command(name = "shecc", about, long_about = None)]
pub struct Cli {
    /// Source file to compile. Only its presence is validated; the
    /// driver does not read or lex it (out of scope, §1) — the pipeline
    /// runs against a built-in fixture program instead.
    pub input: PathBuf,

    /// Dump Phase-1 IR to stdout (`dump_ir`, §6).
    #[arg(long = "dump-ir")]
    pub dump_ir: bool,

    /// Emit hardware multiply/divide instead of software routines
    /// (`hard_mul_div`, §6).
    #[arg(long = "hard-mul-div")]
    pub hard_mul_div: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format.
    #[arg(long = "log-format", default_value = "pretty")]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Cli {
    pub fn to_settings(&self) -> Settings {
        Settings {
            dump_ir: self.dump_ir,
            hard_mul_div: self.hard_mul_div,
            ..Settings::default()
        }
    }
}
