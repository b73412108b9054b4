//! The Phase-2 IR instruction shape (`ph2_ir_t`, §3): the register-form
//! lowering produces from Phase-1. Operands reference physical registers
//! and immediates rather than named variables.

use shecc_sem::BlockId;
use shecc_util::Symbol;

pub use shecc_mir::Opcode;

use crate::calling_convention::PhysReg;

/// One Phase-2 IR instruction. `scope` is overwritten by every
/// `add_insn` call that appends it to a block's instruction list — this
/// is ordinary bookkeeping (§4.5), not a bug, even though it means the
/// field always reflects the *last* write rather than a fixed origin.
#[derive(Debug, Clone)]
pub struct Ph2Insn {
    pub opcode: Opcode,
    pub rd: Option<PhysReg>,
    pub rs1: Option<PhysReg>,
    pub rs2: Option<PhysReg>,
    pub imm: Option<i32>,
    pub size: Option<u32>,
    /// The fixed-capacity name slot `add_insn`'s `str` parameter fills,
    /// when non-null (§4.5) — a label or callee name.
    pub name: Option<Symbol>,
    pub scope: BlockId,
    /// The index of the instruction appended immediately before this one
    /// in the same block's list, or `None` if this was the first.
    pub prev: Option<usize>,
}
