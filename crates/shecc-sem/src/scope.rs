//! Lexical scopes (`block_t`, §3 Block) and `BLOCKS`, the insertion-ordered
//! list they are appended to (§4.3).

use shecc_util::{Idx, IndexVec};

use crate::ids::{BlockId, FuncId, MacroId};
use crate::var::Var;

/// A lexical scope: its enclosing block, the function it belongs to, and
/// (when it is a macro expansion frame) the macro it expands.
#[derive(Debug)]
pub struct Block {
    pub parent: Option<BlockId>,
    pub func: FuncId,
    pub macro_: Option<MacroId>,
    locals: Vec<Var>,
}

impl Block {
    pub fn new(parent: Option<BlockId>, func: FuncId, macro_: Option<MacroId>) -> Self {
        Self {
            parent,
            func,
            macro_,
            locals: Vec::new(),
        }
    }

    pub fn locals(&self) -> &[Var] {
        &self.locals
    }

    pub fn next_local(&self) -> usize {
        self.locals.len()
    }

    pub fn declare_local(&mut self, var: Var) {
        self.locals.push(var);
    }

    pub fn find_local(&self, name: &str) -> Option<&Var> {
        self.locals.iter().find(|v| v.var_name.eq_str(name))
    }
}

/// `BLOCKS`: every lexical block ever created, in insertion order, with
/// O(1) append (§3). `BlockId` 0 is always the global pseudo-function's
/// block — the scope `find_var` (§4.2) searches last.
#[derive(Default)]
pub struct BlockTree {
    blocks: IndexVec<BlockId, Block>,
}

impl BlockTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// `add_block(parent, func, macro)` (§4.3): allocate a block with
    /// `next_local = 0` and append it to `BLOCKS`.
    pub fn add_block(
        &mut self,
        parent: Option<BlockId>,
        func: FuncId,
        macro_: Option<MacroId>,
    ) -> BlockId {
        self.blocks.push(Block::new(parent, func, macro_))
    }

    pub fn get(&self, id: BlockId) -> &Block {
        &self.blocks[id]
    }

    pub fn get_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.blocks[id]
    }

    /// The global pseudo-function's block — `BLOCKS`'s head.
    pub fn global(&self) -> BlockId {
        BlockId::from_usize(0)
    }

    /// `BLOCKS`, head to tail, in insertion order (§8 round-trip property).
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.blocks.iter_enumerated()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
