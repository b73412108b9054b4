//! Fixed capacities named in the external interface.
//!
//! The reference source sizes every arena at `global_init` time from a set
//! of `MAX_*` constants defined outside the file this crate was grounded
//! on; their exact values are therefore an implementation choice here, not
//! a contract, with one exception: `MAX_BB_PRED` is fixed at 6 because a
//! testable property (a 7th predecessor must abort) depends on that exact
//! value.

/// Maximum number of distinct function names the hashmap in [`crate`] is
/// sized for (§4.1 "callers size the map to the expected maximum").
pub const MAX_FUNCS: usize = 512;

/// Maximum number of registered types (`TYPES`).
pub const MAX_TYPES: usize = 64;

/// Maximum number of macro definitions (`MACROS`). Kept distinct from
/// [`MAX_ALIASES`] — the reference source reuses one constant for both
/// arenas, which this crate treats as incidental rather than load-bearing.
pub const MAX_MACROS: usize = 64;

/// Maximum number of alias (text substitution) definitions (`ALIASES`).
pub const MAX_ALIASES: usize = 64;

/// Maximum number of named integer constants (`CONSTANTS`).
pub const MAX_CONSTANTS: usize = 64;

/// Maximum number of Phase-1/Phase-2 IR instructions per arena
/// (`PH1_IR`, `PH2_IR`).
pub const MAX_IR_INSTR: usize = 6000;

/// Maximum number of global (pre-`OP_define`) Phase-1 IR instructions
/// (`GLOBAL_IR`).
pub const MAX_GLOBAL_IR: usize = 64;

/// Maximum number of label-table entries (`LABEL_LUT`).
pub const MAX_LABEL: usize = 1024;

/// Maximum size in bytes of the source buffer (`SOURCE`).
pub const MAX_SOURCE: usize = 512 * 1024;

/// Maximum length in bytes of a variable or type name (`MAX_VAR_LEN`).
pub const MAX_VAR_LEN: usize = 64;

/// Maximum predecessor edges per basic block (`basic_block_t::prev[]`).
/// Fixed at 6 — see module docs.
pub const MAX_BB_PRED: usize = 6;

/// Maximum size in bytes of the code section output buffer (`elf_code`).
pub const MAX_CODE: usize = 256 * 1024;

/// Maximum size in bytes of the data section output buffer (`elf_data`).
pub const MAX_DATA: usize = 256 * 1024;

/// Fixed size in bytes of the ELF header buffer (`elf_header`), per §6.
pub const MAX_HEADER: usize = 0x54;

/// Maximum size in bytes of the symbol table output buffer (`elf_symtab`).
pub const MAX_SYMTAB: usize = 64 * 1024;

/// Maximum size in bytes of the string table output buffer (`elf_strtab`).
pub const MAX_STRTAB: usize = 64 * 1024;

/// Maximum size in bytes of the section header output buffer
/// (`elf_section`).
pub const MAX_SECTION: usize = 4 * 1024;

/// The two CLI toggles named in §6 ("global toggles", no subcommands),
/// plus the capacities above, bundled so a caller can override any of them
/// per compilation instead of compiling them in as `const`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Dump Phase-1 IR to stdout (`dump_ir`, §6).
    pub dump_ir: bool,
    /// Emit hardware multiply/divide instead of software routines
    /// (`hard_mul_div`, §6).
    pub hard_mul_div: bool,
    pub max_funcs: usize,
    pub max_types: usize,
    pub max_macros: usize,
    pub max_aliases: usize,
    pub max_constants: usize,
    pub max_ir_instr: usize,
    pub max_global_ir: usize,
    pub max_label: usize,
    pub max_source: usize,
    pub max_var_len: usize,
    pub max_bb_pred: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dump_ir: false,
            hard_mul_div: false,
            max_funcs: MAX_FUNCS,
            max_types: MAX_TYPES,
            max_macros: MAX_MACROS,
            max_aliases: MAX_ALIASES,
            max_constants: MAX_CONSTANTS,
            max_ir_instr: MAX_IR_INSTR,
            max_global_ir: MAX_GLOBAL_IR,
            max_label: MAX_LABEL,
            max_source: MAX_SOURCE,
            max_var_len: MAX_VAR_LEN,
            max_bb_pred: MAX_BB_PRED,
        }
    }
}
