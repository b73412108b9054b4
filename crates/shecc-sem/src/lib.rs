//! The global symbol universe (§3, §4.2): types, variables, functions,
//! blocks/scopes, macros, aliases, and named constants, plus the lookup
//! services the front-end and lowering pass resolve names through.
//!
//! Every arena-backed table here is owned by [`SymbolUniverse`] rather
//! than living as a process-wide global (§9, "global mutable state → owned
//! context") — one value threaded through a compilation instead of the
//! reference source's `global_init`/`global_release` pair.

pub mod func;
pub mod ids;
pub mod scope;
pub mod types;
pub mod var;

use shecc_util::limits::Settings;
use thiserror::Error;

pub use func::{Alias, Constant, DirectiveTable, Func, FuncTable, Macro};
pub use ids::{AliasId, BlockId, ConstantId, FuncId, MacroId, TypeId, VarId};
pub use scope::{Block, BlockTree};
pub use types::{BaseType, Type, TypeTable};
pub use var::{set_var_liveout, Var};

/// Symbol-resolution failures a well-formed program must never trigger,
/// and a malformed one must surface as a recoverable `Result` rather than
/// the `abort()` reserved for structural bugs (§7, §10.1).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SemError {
    /// `find_type` found no entry at all for the name (§4.2).
    #[error("unresolved type: {0}")]
    UnresolvedType(String),

    /// The resolved type is a forward declaration whose `base_struct` was
    /// never filled in (§3 invariant 1, §4.2).
    #[error("incomplete type: {0}")]
    IncompleteType(String),

    /// `find_macro_param_src_idx` was called with no enclosing block
    /// (§4.2) — the reference source's null-deref-before-check is fixed
    /// here by testing for the absent parent first (§9).
    #[error("macro expansion not supported at global scope")]
    MacroExpansionAtGlobalScope,
}

pub type SemResult<T> = Result<T, SemError>;

/// The symbol universe for a single compilation: every arena named in §3,
/// brought up together and threaded through the pipeline in place of
/// process-wide globals.
pub struct SymbolUniverse {
    pub types: TypeTable,
    pub blocks: BlockTree,
    pub funcs: FuncTable,
    pub directives: DirectiveTable,
    global_func: FuncId,
    global_block: BlockId,
}

impl SymbolUniverse {
    /// The "bring all arenas up" half of the reference source's lifecycle
    /// (§3 Lifecycle, §4.3): registers the global pseudo-function and its
    /// block, matching `global_init`'s literal `add_func("")` (§10.6).
    pub fn new(settings: &Settings) -> Self {
        let mut funcs = FuncTable::new(settings.max_funcs);
        let global_func = funcs.add_func(Func::global_pseudo_function());
        let mut blocks = BlockTree::new();
        let global_block = blocks.add_block(None, global_func, None);

        Self {
            types: TypeTable::new(),
            blocks,
            funcs,
            directives: DirectiveTable::new(),
            global_func,
            global_block,
        }
    }

    /// The distinguished empty-name function holding global declarations.
    pub fn global_func(&self) -> FuncId {
        self.global_func
    }

    /// `BLOCKS`'s head — the global pseudo-function's block.
    pub fn global_block(&self) -> BlockId {
        self.blocks.global()
    }

    /// `find_var(token, block)` (§4.2): innermost-block-first scan up to
    /// the enclosing function's own top-level block, then that function's
    /// parameters, then — only if nothing local matched — the global
    /// scope. Lexical shadowing falls out of scanning inner blocks first.
    pub fn find_var(&self, name: &str, block: BlockId) -> Option<&Var> {
        let mut current = Some(block);
        while let Some(id) = current {
            let blk = self.blocks.get(id);
            if let Some(v) = blk.find_local(name) {
                return Some(v);
            }
            current = blk.parent;
        }

        let owner = self.blocks.get(block).func;
        if let Some(v) = self.funcs.get(owner).find_param(name) {
            return Some(v);
        }

        self.blocks.get(self.global_block).find_local(name)
    }

    /// `size_var` (§3 Variable, §10.6): pointer or function depth ⇒ 4
    /// bytes; otherwise resolve the named type (following a forward
    /// declaration's `base_struct`), multiplying by `array_size` when the
    /// variable is an array.
    ///
    /// Looked up via [`TypeTable::find_type_raw`] rather than
    /// [`TypeTable::find_type`] because the two failure modes must stay
    /// distinct here: `find_type` redirects a resolved forward declaration
    /// to its `base_struct` but returns `None` for both "no entry named
    /// `type_name`" and "entry exists but is an unresolved forward
    /// declaration" — this method needs to tell those apart to report
    /// `UnresolvedType` vs `IncompleteType` correctly.
    pub fn size_of(&self, var: &Var) -> SemResult<u32> {
        if var.is_ptr > 0 || var.is_func {
            return Ok(4);
        }

        let type_id = self
            .types
            .find_type_raw(var.type_name.as_str(), 0)
            .ok_or_else(|| SemError::UnresolvedType(var.type_name.as_str().to_string()))?;
        let ty = self.types.get(type_id);

        let resolved = if ty.base_type == BaseType::Typedef && ty.size == 0 {
            let base = ty
                .base_struct
                .ok_or_else(|| SemError::IncompleteType(var.type_name.as_str().to_string()))?;
            self.types.get(base)
        } else {
            ty
        };

        let mut size = resolved.size;
        if var.array_size > 0 {
            size *= var.array_size;
        }
        Ok(size)
    }

    /// Validate every local declared directly in the global block by
    /// sizing it (§4.3, §10.6) — the one semantic check the driver runs
    /// over whatever a compilation declared at file scope. Returns one
    /// `(name, error)` pair per local that fails to size, in declaration
    /// order.
    pub fn check_globals(&self) -> Vec<(String, SemError)> {
        self.blocks
            .get(self.global_block)
            .locals()
            .iter()
            .filter_map(|var| match self.size_of(var) {
                Ok(_) => None,
                Err(e) => Some((var.var_name.as_str().to_string(), e)),
            })
            .collect()
    }

    /// `find_macro_param_src_idx(name, parent)` (§4.2, §9): the null
    /// check on `parent` runs *before* any access to `parent->macro`,
    /// unlike the reference source. Returns `Ok(0)` both when `parent` is
    /// not a macro expansion frame and when `name` is not one of its
    /// parameters — the reference source's documented ambiguity, not a
    /// bug, per §4.2.
    pub fn find_macro_param_src_idx(
        &self,
        name: &str,
        parent: Option<BlockId>,
    ) -> SemResult<usize> {
        let parent = parent.ok_or(SemError::MacroExpansionAtGlobalScope)?;
        let block = self.blocks.get(parent);
        let macro_id = match block.macro_ {
            Some(id) => id,
            None => return Ok(0),
        };

        let m = self.directives.get_macro(macro_id);
        Ok(match m.param_defs.iter().position(|p| p.var_name.eq_str(name)) {
            Some(i) => m.params.get(i).copied().unwrap_or(0),
            None => 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shecc_util::Symbol;

    fn sym(s: &str) -> Symbol {
        Symbol::intern(s)
    }

    fn universe() -> SymbolUniverse {
        SymbolUniverse::new(&Settings::default())
    }

    #[test]
    fn global_pseudo_function_exists_with_stack_size_four() {
        let u = universe();
        assert_eq!(u.funcs.get(u.global_func()).name, sym(""));
        assert_eq!(u.funcs.get(u.global_func()).stack_size, 4);
    }

    #[test]
    fn lexical_shadowing_of_a_global_by_an_inner_block() {
        let mut u = universe();
        u.blocks
            .get_mut(u.global_block())
            .declare_local(Var::new(sym("x"), sym("int")));

        let fn_id = u.funcs.add_func(Func::new(sym("f"), sym("int")));
        let fn_block = u.blocks.add_block(None, fn_id, None);
        let inner = u.blocks.add_block(Some(fn_block), fn_id, None);
        u.blocks
            .get_mut(inner)
            .declare_local(Var::new(sym("x"), sym("char")));

        assert_eq!(u.find_var("x", inner).unwrap().type_name, sym("char"));
        assert_eq!(
            u.find_var("x", u.global_block()).unwrap().type_name,
            sym("int")
        );
    }

    #[test]
    fn find_var_falls_through_to_function_parameters() {
        let mut u = universe();
        let mut f = Func::new(sym("f"), sym("int"));
        f.param_defs.push(Var::new(sym("n"), sym("int")));
        let fn_id = u.funcs.add_func(f);
        let fn_block = u.blocks.add_block(None, fn_id, None);

        assert!(u.find_var("n", fn_block).is_some());
        assert!(u.find_var("missing", fn_block).is_none());
    }

    #[test]
    fn size_of_a_pointer_is_always_four() {
        let u = universe();
        let v = Var::new(sym("p"), sym("nonexistent")).pointer(1);
        assert_eq!(u.size_of(&v), Ok(4));
    }

    #[test]
    fn size_of_an_incomplete_type_is_an_error() {
        let mut u = universe();
        u.types
            .add_type(Type::forward_declared_typedef(sym("T")));
        let v = Var::new(sym("v"), sym("T"));
        assert_eq!(
            u.size_of(&v),
            Err(SemError::IncompleteType("T".to_string()))
        );
    }

    #[test]
    fn size_of_follows_a_resolved_forward_declaration() {
        let mut u = universe();
        let s = u.types.add_type(Type::new(sym("S"), BaseType::Struct, 8));
        let mut fwd = Type::forward_declared_typedef(sym("T"));
        fwd.base_struct = Some(s);
        u.types.add_type(fwd);

        let v = Var::new(sym("v"), sym("T")).array(3);
        assert_eq!(u.size_of(&v), Ok(24));
    }

    #[test]
    fn macro_param_lookup_fails_fast_at_global_scope() {
        let u = universe();
        assert_eq!(
            u.find_macro_param_src_idx("x", None),
            Err(SemError::MacroExpansionAtGlobalScope)
        );
    }

    #[test]
    fn macro_param_lookup_resolves_through_a_macro_frame() {
        let mut u = universe();
        let mut m = Macro::new(sym("M"));
        m.param_defs.push(Var::new(sym("arg"), sym("int")));
        m.params.push(7);
        let macro_id = u.directives.add_macro(m);

        let fn_id = u.funcs.add_func(Func::new(sym("f"), sym("int")));
        let frame = u.blocks.add_block(None, fn_id, Some(macro_id));

        assert_eq!(u.find_macro_param_src_idx("arg", Some(frame)), Ok(7));
        assert_eq!(u.find_macro_param_src_idx("other", Some(frame)), Ok(0));
    }
}
