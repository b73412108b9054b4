//! A small built-in program the driver runs through the Phase-1 →
//! Phase-2 pipeline to demonstrate it (§10.4) — this crate does not lex
//! or parse free-form source, so there is no file to read instead.
//!
//! Roughly:
//! ```c
//! int main(void) {
//!     int a = 1;
//!     int b = 2;
//!     if (a) goto L0; else goto L1;
//! L0:
//!     return a + b;
//! L1:
//!     return 0;
//! }
//! ```

use shecc_lir::{lower_function, BasicBlockId, CfgResult};
use shecc_mir::Opcode;
use shecc_util::{Idx, Symbol};

use crate::context::CompilationContext;

/// Build the fixture's Phase-1 IR into `ctx.ph1_ir`, then lower it into
/// `ctx.cfg`, returning the function's entry block.
pub fn build_fixture_program(ctx: &mut CompilationContext) -> CfgResult<BasicBlockId> {
    let ir = &mut ctx.ph1_ir;
    let sym = Symbol::intern;

    let def = ir.add_ph1_ir(Opcode::Define).unwrap();
    {
        let insn = ir.get_ph1_mut(def);
        insn.type_name = Some(sym("int"));
        insn.func_name = Some(sym("main"));
    }
    ir.add_ph1_ir(Opcode::BlockStart).unwrap();

    let const_a = ir.add_ph1_ir(Opcode::LoadConstant).unwrap();
    {
        let insn = ir.get_ph1_mut(const_a);
        insn.dest = Some(sym("a"));
        insn.imm = Some(1);
    }

    let const_b = ir.add_ph1_ir(Opcode::LoadConstant).unwrap();
    {
        let insn = ir.get_ph1_mut(const_b);
        insn.dest = Some(sym("b"));
        insn.imm = Some(2);
    }

    let branch = ir.add_ph1_ir(Opcode::Branch).unwrap();
    {
        let insn = ir.get_ph1_mut(branch);
        insn.dest = Some(sym("a"));
        insn.branch_then = Some(sym("L0"));
        insn.branch_else = Some(sym("L1"));
    }

    let label_then = ir.add_ph1_ir(Opcode::Label).unwrap();
    ir.get_ph1_mut(label_then).name = Some(sym("L0"));

    let sum = ir.add_ph1_ir(Opcode::Add).unwrap();
    {
        let insn = ir.get_ph1_mut(sum);
        insn.dest = Some(sym("c"));
        insn.src0 = Some(sym("a"));
        insn.src1 = Some(sym("b"));
    }

    let ret_sum = ir.add_ph1_ir(Opcode::Return).unwrap();
    ir.get_ph1_mut(ret_sum).src0 = Some(sym("c"));

    let label_else = ir.add_ph1_ir(Opcode::Label).unwrap();
    ir.get_ph1_mut(label_else).name = Some(sym("L1"));

    ir.add_ph1_ir(Opcode::Return).unwrap();

    ir.add_ph1_ir(Opcode::BlockEnd).unwrap();

    let body = ir.ph1_ir().as_slice().to_vec();
    let scope = ctx.symbols.global_block();
    let func = shecc_sem::FuncId::from_usize(0);
    lower_function(&body, scope, func, &mut ctx.cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shecc_util::limits::Settings;

    #[test]
    fn the_fixture_lowers_to_a_cfg_with_a_branch() {
        let mut ctx = CompilationContext::new(&Settings::default());
        let entry = build_fixture_program(&mut ctx).unwrap();
        assert!(ctx.cfg.get(entry).then_.is_some());
        assert!(ctx.cfg.get(entry).else_.is_some());
    }
}
