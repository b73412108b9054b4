//! Phase-2 IR: the register-form lowering produces from Phase-1 (§3),
//! wired into a per-function control-flow graph of basic blocks (§4.5).

pub mod calling_convention;
pub mod cfg;
pub mod error;
pub mod lir;
pub mod lower;
pub mod stack_frame;

pub use calling_convention::{PhysReg, RegSlot, RegisterFile, NUM_PHYS_REGS};
pub use cfg::{BasicBlock, BasicBlockId, Cfg, EdgeKind, PredEdge};
pub use error::{CfgError, CfgResult};
pub use lir::{Opcode, Ph2Insn};
pub use lower::lower_function;
pub use stack_frame::alloc_stack_slot;
