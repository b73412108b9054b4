//! Functions, macros, aliases, and named constants (`func_t`, `macro_t`,
//! `alias_t`, `constant_t`, §3) — every arena the resolver looks up a name
//! against other than `TYPES` and `BLOCKS`.

use shecc_util::{Hashmap, Idx, IndexVec, Symbol};

use crate::ids::{AliasId, ConstantId, FuncId, MacroId};
use crate::var::Var;

/// A declared function (`func_t`). `return_def` is a variable descriptor
/// that reuses the function's own name, per §3. `stack_size` starts at 4
/// bytes (the reference source's initial frame slot) and grows as the
/// (out-of-scope) lowering pass allocates locals into it.
#[derive(Debug, Clone)]
pub struct Func {
    pub name: Symbol,
    pub return_def: Var,
    pub param_defs: Vec<Var>,
    pub stack_size: u32,
}

impl Func {
    pub fn new(name: Symbol, return_type: Symbol) -> Self {
        Self {
            return_def: Var::new(name, return_type),
            name,
            param_defs: Vec::new(),
            stack_size: 4,
        }
    }

    /// The distinguished empty-name function holding global declarations
    /// (§3, §10.6): literally `add_func("")`.
    pub fn global_pseudo_function() -> Self {
        Self::new(Symbol::intern(""), Symbol::intern("void"))
    }

    pub fn num_params(&self) -> usize {
        self.param_defs.len()
    }

    pub fn find_param(&self, name: &str) -> Option<&Var> {
        self.param_defs.iter().find(|p| p.var_name.eq_str(name))
    }
}

/// `FUNCS` plus the name→`FuncId` hashmap `find_func` dispatches to
/// (§4.2). Sized to `MAX_FUNCS` at construction (§4.1 rationale).
pub struct FuncTable {
    funcs: IndexVec<FuncId, Func>,
    by_name: Hashmap<FuncId>,
}

impl FuncTable {
    pub fn new(max_funcs: usize) -> Self {
        Self {
            funcs: IndexVec::new(),
            by_name: Hashmap::create(max_funcs as u32),
        }
    }

    /// Appends `func` to `FUNCS` and indexes it by name. Matches the
    /// hashmap's documented shadowing behavior (§4.1): re-adding a name
    /// already present does not replace the earlier entry as far as
    /// `find_func` is concerned.
    pub fn add_func(&mut self, func: Func) -> FuncId {
        let name = func.name;
        let id = self.funcs.push(func);
        self.by_name.put(name.as_str(), id);
        id
    }

    /// `find_func` (§4.2): dispatches to the hashmap.
    pub fn find_func(&self, name: &str) -> Option<FuncId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: FuncId) -> &Func {
        &self.funcs[id]
    }

    pub fn get_mut(&mut self, id: FuncId) -> &mut Func {
        &mut self.funcs[id]
    }
}

/// A preprocessor macro (`macro_t`). `params` holds, per call site, the
/// source indices of the argument text substituted for each parameter.
#[derive(Debug, Clone)]
pub struct Macro {
    pub name: Symbol,
    pub param_defs: Vec<Var>,
    pub params: Vec<usize>,
    pub disabled: bool,
}

impl Macro {
    pub fn new(name: Symbol) -> Self {
        Self {
            name,
            param_defs: Vec::new(),
            params: Vec::new(),
            disabled: false,
        }
    }
}

/// Simple preprocessor text substitution (`alias_t`): `alias` → `value`.
#[derive(Debug, Clone)]
pub struct Alias {
    pub alias: Symbol,
    pub value: Symbol,
    pub disabled: bool,
}

/// A named integer constant (`constant_t`): `alias` → `value`.
#[derive(Debug, Clone)]
pub struct Constant {
    pub alias: Symbol,
    pub value: i32,
}

/// `MACROS`, `ALIASES`, and `CONSTANTS`: monotonically-filled arenas with
/// `disabled`-flag logical removal (§3 Lifecycle) and the linear-scan
/// lookups named in §4.2.
#[derive(Default)]
pub struct DirectiveTable {
    macros: IndexVec<MacroId, Macro>,
    aliases: IndexVec<AliasId, Alias>,
    constants: IndexVec<ConstantId, Constant>,
}

impl DirectiveTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_macro(&mut self, m: Macro) -> MacroId {
        self.macros.push(m)
    }

    /// Linear scan honoring `disabled` (§4.2 `find_macro`); the first
    /// non-disabled match by insertion order wins.
    pub fn find_macro(&self, name: &str) -> Option<MacroId> {
        self.macros
            .iter_enumerated()
            .find(|(_, m)| !m.disabled && m.name.eq_str(name))
            .map(|(id, _)| id)
    }

    pub fn get_macro(&self, id: MacroId) -> &Macro {
        &self.macros[id]
    }

    pub fn disable_macro(&mut self, id: MacroId) {
        self.macros[id].disabled = true;
    }

    pub fn add_alias(&mut self, alias: Symbol, value: Symbol) -> AliasId {
        self.aliases.push(Alias {
            alias,
            value,
            disabled: false,
        })
    }

    /// Linear scan honoring `disabled` (§4.2 `find_alias`).
    pub fn find_alias(&self, name: &str) -> Option<AliasId> {
        self.aliases
            .iter_enumerated()
            .find(|(_, a)| !a.disabled && a.alias.eq_str(name))
            .map(|(id, _)| id)
    }

    pub fn get_alias(&self, id: AliasId) -> &Alias {
        &self.aliases[id]
    }

    /// Soft-delete by name: `remove_alias("X")` followed by
    /// `find_alias("X")` then returns `None` (§8 round-trip property).
    pub fn remove_alias(&mut self, name: &str) {
        if let Some(id) = self.find_alias(name) {
            self.aliases[id].disabled = true;
        }
    }

    pub fn add_constant(&mut self, alias: Symbol, value: i32) -> ConstantId {
        self.constants.push(Constant { alias, value })
    }

    /// Linear scan (§4.2 `find_constant`); `CONSTANTS` has no `disabled`
    /// flag in the reference source, so every entry is a candidate.
    pub fn find_constant(&self, name: &str) -> Option<ConstantId> {
        self.constants
            .iter_enumerated()
            .find(|(_, c)| c.alias.eq_str(name))
            .map(|(id, _)| id)
    }

    pub fn get_constant(&self, id: ConstantId) -> &Constant {
        &self.constants[id]
    }
}
