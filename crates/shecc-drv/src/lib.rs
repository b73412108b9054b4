//! The compiler driver (§10.4): wires `clap`-derived argument parsing to
//! the in-scope surface only. It constructs a [`CompilationContext`],
//! runs the demonstrable portion of the two-phase pipeline against a
//! built-in fixture program, and reports diagnostics — it does not lex,
//! parse free-form C-like source, or emit ELF bytes, since those remain
//! out of scope.

pub mod cli;
pub mod context;
pub mod fixture;

pub use cli::Cli;
pub use context::CompilationContext;

use anyhow::{Context, Result};
use shecc_sem::SemError;
use shecc_util::diagnostic::{
    Diagnostic, Handler, Span, E_SEMANTIC_INCOMPLETE_TYPE, E_SEMANTIC_MACRO_GLOBAL_SCOPE,
    E_SEMANTIC_UNDEFINED_VAR,
};
use tracing::info;

/// Run one compilation: build the context, lower the fixture program,
/// optionally dump Phase-1 IR, and report diagnostics.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = cli.to_settings();
    let mut ctx = CompilationContext::new(&settings);
    let handler = Handler::new();

    info!(input = %cli.input.display(), "starting compilation");

    fixture::build_fixture_program(&mut ctx)
        .context("lowering the fixture program into a control-flow graph")?;

    if settings.dump_ir {
        print!("{}", shecc_mir::dump_ph1_ir(&ctx.ph1_ir));
    }

    report_semantic_errors(&ctx, &handler);

    if handler.has_errors() {
        anyhow::bail!(
            "compilation failed with {} error(s)",
            handler.error_count()
        );
    }

    Ok(())
}

/// Validate every global `ctx.symbols` declared and feed each failure
/// into `handler` as a diagnostic with the matching semantic error code.
fn report_semantic_errors(ctx: &CompilationContext, handler: &Handler) {
    for (name, err) in ctx.symbols.check_globals() {
        let code = match err {
            SemError::IncompleteType(_) => E_SEMANTIC_INCOMPLETE_TYPE,
            SemError::MacroExpansionAtGlobalScope => E_SEMANTIC_MACRO_GLOBAL_SCOPE,
            SemError::UnresolvedType(_) => E_SEMANTIC_UNDEFINED_VAR,
        };
        handler.emit_diagnostic(
            Diagnostic::error(format!("`{name}`: {err}"), Span::DUMMY).with_code(code),
        );
    }
}

/// Install a `tracing` subscriber at the verbosity `cli` requests
/// (§10.2) — ambient logging, independent of the diagnostic `Handler`
/// the pipeline itself reports compile errors through.
pub fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
