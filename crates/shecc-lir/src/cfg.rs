//! The per-function control-flow graph of basic blocks (`basic_block_t`,
//! §3) and the operations that build it (§4.5).

use shecc_sem::{BlockId, FuncId};
use shecc_util::{Idx, IndexVec, Symbol};

use crate::lir::{Opcode, Ph2Insn};
use crate::PhysReg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BasicBlockId(u32);

impl Idx for BasicBlockId {
    fn from_usize(idx: usize) -> Self {
        BasicBlockId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A predecessor edge's kind: which of the predecessor's three successor
/// slots points at the block that records it (§3 Basic block).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Next,
    Then,
    Else,
}

#[derive(Debug, Clone, Copy)]
pub struct PredEdge {
    pub bb: BasicBlockId,
    pub kind: EdgeKind,
}

/// A straight-line basic block: one entry, one exit, wired into its
/// function's CFG (§3).
pub struct BasicBlock {
    pub scope: BlockId,
    pub belong_to: FuncId,
    prev: Vec<Option<PredEdge>>,
    pub next: Option<BasicBlockId>,
    pub then_: Option<BasicBlockId>,
    pub else_: Option<BasicBlockId>,
    insns: Vec<Ph2Insn>,
    symbols: Vec<Symbol>,
}

impl BasicBlock {
    fn new(scope: BlockId, belong_to: FuncId, max_bb_pred: usize) -> Self {
        Self {
            scope,
            belong_to,
            prev: vec![None; max_bb_pred],
            next: None,
            then_: None,
            else_: None,
            insns: Vec::new(),
            symbols: Vec::new(),
        }
    }

    pub fn prev(&self) -> &[Option<PredEdge>] {
        &self.prev
    }

    pub fn insns(&self) -> &[Ph2Insn] {
        &self.insns
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    fn successor_slot(&mut self, kind: EdgeKind) -> &mut Option<BasicBlockId> {
        match kind {
            EdgeKind::Next => &mut self.next,
            EdgeKind::Then => &mut self.then_,
            EdgeKind::Else => &mut self.else_,
        }
    }
}

/// The whole program's basic blocks, addressed by [`BasicBlockId`] —
/// every function's CFG lives in the same arena (§9, "pointer-heavy
/// graphs → arena + index").
pub struct Cfg {
    blocks: IndexVec<BasicBlockId, BasicBlock>,
    max_bb_pred: usize,
}

impl Cfg {
    pub fn new(max_bb_pred: usize) -> Self {
        Self {
            blocks: IndexVec::new(),
            max_bb_pred,
        }
    }

    /// `bb_create(parent)` (§4.5): allocate a block with every
    /// predecessor slot empty, scoped to `parent` and owned by its
    /// function.
    pub fn bb_create(&mut self, scope: BlockId, belong_to: FuncId) -> BasicBlockId {
        self.blocks
            .push(BasicBlock::new(scope, belong_to, self.max_bb_pred))
    }

    pub fn get(&self, id: BasicBlockId) -> &BasicBlock {
        &self.blocks[id]
    }

    /// `bb_connect(pred, succ, type)` (§4.5): wire one edge of kind
    /// `kind` from `pred` to `succ`. Aborts — a structural bug, not a
    /// recoverable error (§7) — if `pred` already has an edge of that
    /// kind, or if `succ` has no free predecessor slot (`MAX_BB_PRED`
    /// exceeded).
    pub fn bb_connect(&mut self, pred: BasicBlockId, succ: BasicBlockId, kind: EdgeKind) {
        if self.blocks[pred].successor_slot(kind).is_some() {
            panic!("bb_connect: predecessor already has a {kind:?} successor");
        }

        let slot = self.blocks[succ]
            .prev
            .iter()
            .position(Option::is_none)
            .unwrap_or_else(|| panic!("bb_connect: MAX_BB_PRED exceeded"));

        self.blocks[succ].prev[slot] = Some(PredEdge { bb: pred, kind });
        *self.blocks[pred].successor_slot(kind) = Some(succ);
    }

    /// `bb_disconnect(pred, succ)` (§4.5): clear the edge between `pred`
    /// and `succ`, if one exists. A no-op if they were never connected.
    pub fn bb_disconnect(&mut self, pred: BasicBlockId, succ: BasicBlockId) {
        let slot = self.blocks[succ]
            .prev
            .iter()
            .position(|p| matches!(p, Some(e) if e.bb == pred));

        if let Some(slot) = slot {
            let kind = self.blocks[succ].prev[slot].unwrap().kind;
            self.blocks[succ].prev[slot] = None;
            *self.blocks[pred].successor_slot(kind) = None;
        }
    }

    /// `add_symbol(bb, var)` (§4.5): idempotent append — a variable
    /// already present keeps its original dense index rather than being
    /// appended again.
    pub fn add_symbol(&mut self, bb: BasicBlockId, var: Symbol) -> usize {
        let symbols = &mut self.blocks[bb].symbols;
        match symbols.iter().position(|s| *s == var) {
            Some(i) => i,
            None => {
                symbols.push(var);
                symbols.len() - 1
            }
        }
    }

    /// `add_insn(block, bb, op, rd, rs1, rs2, sz, str)` (§4.5):
    /// tail-append to `bb`'s instruction list, recording the prior tail's
    /// index as `prev` and stamping `scope` with `block` (overwritten on
    /// every call — ordinary bookkeeping, not an error, per §4.5's note).
    #[allow(clippy::too_many_arguments)]
    pub fn add_insn(
        &mut self,
        block: BlockId,
        bb: BasicBlockId,
        op: Opcode,
        rd: Option<PhysReg>,
        rs1: Option<PhysReg>,
        rs2: Option<PhysReg>,
        size: Option<u32>,
        name: Option<Symbol>,
    ) -> usize {
        let insns = &mut self.blocks[bb].insns;
        let prev = if insns.is_empty() {
            None
        } else {
            Some(insns.len() - 1)
        };
        insns.push(Ph2Insn {
            opcode: op,
            rd,
            rs1,
            rs2,
            imm: None,
            size,
            name,
            scope: block,
            prev,
        });
        insns.len() - 1
    }
}
