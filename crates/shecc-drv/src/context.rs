//! [`CompilationContext`]: the owned-state replacement for the reference
//! source's process-wide `global_init`/`global_release` pair (§9) —
//! everything the pipeline touches lives here, brought up once per
//! compilation and dropped at the end.

use shecc_lir::Cfg;
use shecc_mir::{LabelTable, Ph1IrBuilder};
use shecc_sem::SymbolUniverse;
use shecc_util::elf::ElfImage;
use shecc_util::limits::Settings;

/// Everything one compilation needs, in place of the reference source's
/// globals. `global_init` becomes [`CompilationContext::new`];
/// `global_release` becomes simply dropping the value.
pub struct CompilationContext {
    pub settings: Settings,
    pub symbols: SymbolUniverse,
    pub ph1_ir: Ph1IrBuilder,
    pub labels: LabelTable,
    pub cfg: Cfg,
    pub elf: ElfImage,
}

impl CompilationContext {
    /// `global_init` (§3 Lifecycle): bring up every arena at its
    /// `Settings`-chosen capacity, including the global pseudo-function
    /// and its block (§10.6) — these are constructed explicitly here
    /// rather than left implicit.
    pub fn new(settings: &Settings) -> Self {
        Self {
            symbols: SymbolUniverse::new(settings),
            ph1_ir: Ph1IrBuilder::new(settings.max_global_ir, settings.max_ir_instr),
            labels: LabelTable::new(settings.max_label),
            cfg: Cfg::new(settings.max_bb_pred),
            elf: ElfImage::new(settings),
            settings: settings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_has_the_global_pseudo_function_and_block() {
        let ctx = CompilationContext::new(&Settings::default());
        let global = ctx.symbols.funcs.get(ctx.symbols.global_func());
        assert_eq!(global.name.as_str(), "");
        assert_eq!(global.stack_size, 4);
    }
}
