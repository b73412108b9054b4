//! Phase-1 IR: the linearized, scope-bracketed tree form the parser
//! builds as it goes (§2, §4.4), plus the label table and textual dumper
//! that ride alongside it (§4.6, §4.7).

pub mod dump;
pub mod ir;
pub mod label;
pub mod opcode;

pub use dump::dump_ph1_ir;
pub use ir::{Ph1Insn, Ph1IrBuilder, Ph1IrId};
pub use label::LabelTable;
pub use opcode::Opcode;
