//! Phase-1 → Phase-2 lowering (§4: "the Phase-1 stream is the canonical
//! representation the lowering step consumes"): walking one function's
//! bracketed Phase-1 stream, shaping its [`Cfg`], and resolving
//! `OP_jump`/`OP_branch` targets against the labels `OP_label`
//! introduced earlier in the same function.
//!
//! Register allocation is out of scope (§1) — this pass only produces
//! the CFG's shape. Filling each `Ph2Insn`'s `rd`/`rs1`/`rs2` from the
//! Phase-1 operand bag is the allocator's job, not lowering's.

use std::collections::HashMap;

use shecc_mir::{Opcode, Ph1Insn};
use shecc_sem::{BlockId, FuncId};
use shecc_util::Symbol;

use crate::cfg::{BasicBlockId, Cfg, EdgeKind};
use crate::error::{CfgError, CfgResult};

/// Lower one function's bracketed Phase-1 instruction slice into basic
/// blocks wired into `cfg`, returning the entry block.
///
/// `insns` must span exactly one `OP_define`'s body: its
/// `OP_block_start`/`OP_block_end` pairs must balance, and every
/// `OP_jump`/`OP_branch` target must have a matching `OP_label`
/// somewhere in the slice.
pub fn lower_function(
    insns: &[Ph1Insn],
    scope: BlockId,
    func: FuncId,
    cfg: &mut Cfg,
) -> CfgResult<BasicBlockId> {
    let entry = cfg.bb_create(scope, func);
    let mut current = entry;
    let mut depth: u32 = 0;
    let mut labels: HashMap<Symbol, BasicBlockId> = HashMap::new();
    let mut pending_jumps: Vec<(Symbol, BasicBlockId)> = Vec::new();
    let mut pending_branches: Vec<(Symbol, Symbol, BasicBlockId)> = Vec::new();

    for (i, insn) in insns.iter().enumerate() {
        match insn.opcode {
            Opcode::BlockStart => depth += 1,
            Opcode::BlockEnd => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(CfgError::UnbalancedBlock(i as u32))?;
            }
            Opcode::Label => {
                if let Some(name) = insn.name {
                    let target = cfg.bb_create(scope, func);
                    cfg.bb_connect(current, target, EdgeKind::Next);
                    labels.insert(name, target);
                    current = target;
                }
            }
            Opcode::Jump => {
                if let Some(name) = insn.name {
                    pending_jumps.push((name, current));
                    current = cfg.bb_create(scope, func);
                }
            }
            Opcode::Branch => {
                if let (Some(then_name), Some(else_name)) = (insn.branch_then, insn.branch_else) {
                    pending_branches.push((then_name, else_name, current));
                    current = cfg.bb_create(scope, func);
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(CfgError::UnbalancedBlock(insns.len() as u32));
    }

    for (name, from) in pending_jumps {
        let target = *labels
            .get(&name)
            .ok_or_else(|| CfgError::UnknownJumpTarget(name.as_str().to_string()))?;
        cfg.bb_connect(from, target, EdgeKind::Next);
    }

    for (then_name, else_name, from) in pending_branches {
        let then_target = *labels
            .get(&then_name)
            .ok_or_else(|| CfgError::UnknownJumpTarget(then_name.as_str().to_string()))?;
        let else_target = *labels
            .get(&else_name)
            .ok_or_else(|| CfgError::UnknownJumpTarget(else_name.as_str().to_string()))?;
        cfg.bb_connect(from, then_target, EdgeKind::Then);
        cfg.bb_connect(from, else_target, EdgeKind::Else);
    }

    Ok(entry)
}
