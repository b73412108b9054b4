//! Named C types (`type_t`, §3 Type) and the flagged linear scan that
//! resolves them (`find_type`, §4.2).

use shecc_util::{Idx, IndexVec, Symbol};

use crate::ids::TypeId;
use crate::var::Var;

/// `type_t::base_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Int,
    Char,
    Void,
    Struct,
    Typedef,
}

/// A named C type: a primitive, a `struct` tag, or a `typedef` alias for
/// one. `size == 0` on a `Typedef` marks a forward declaration (§3
/// invariant 1) — `base_struct` must resolve before the type can be sized
/// or have its members looked up.
#[derive(Debug, Clone)]
pub struct Type {
    pub type_name: Symbol,
    pub base_type: BaseType,
    pub size: u32,
    pub fields: Vec<Var>,
    pub base_struct: Option<TypeId>,
}

impl Type {
    pub fn new(type_name: Symbol, base_type: BaseType, size: u32) -> Self {
        Self {
            type_name,
            base_type,
            size,
            fields: Vec::new(),
            base_struct: None,
        }
    }

    pub fn with_fields(mut self, fields: Vec<Var>) -> Self {
        self.fields = fields;
        self
    }

    pub fn forward_declared_typedef(type_name: Symbol) -> Self {
        Self::new(type_name, BaseType::Typedef, 0)
    }

    fn is_struct_tag(&self) -> bool {
        matches!(self.base_type, BaseType::Struct)
    }
}

/// `TYPES`: the arena of registered types plus the one operation that
/// resolves names against it.
#[derive(Default)]
pub struct TypeTable {
    types: IndexVec<TypeId, Type>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(&mut self, ty: Type) -> TypeId {
        self.types.push(ty)
    }

    /// Linear scan of `TYPES` (§4.2). `flag=0` matches any entry named
    /// `name`; `flag=1` excludes struct-tag entries (used resolving a
    /// typedef/var type); `flag=2` returns only struct-tag entries (used
    /// resolving `struct X`). A forward-declared typedef transparently
    /// resolves to its `base_struct` rather than returning itself (§3
    /// invariant 5) — and to *no* entry at all if `base_struct` hasn't
    /// been resolved yet, indistinguishable here from "name never
    /// declared". Callers that must tell those two apart (e.g.
    /// [`crate::SymbolUniverse::size_of`]) use [`Self::find_type_raw`]
    /// instead.
    pub fn find_type(&self, name: &str, flag: u8) -> Option<TypeId> {
        let id = self.find_type_raw(name, flag)?;
        let ty = self.get(id);
        if ty.base_type == BaseType::Typedef && ty.size == 0 {
            return ty.base_struct;
        }
        Some(id)
    }

    /// Linear scan of `TYPES`, identical to [`Self::find_type`]'s name/flag
    /// matching but *without* redirecting a forward-declared typedef to its
    /// `base_struct` — returns the typedef entry itself, `size == 0` and
    /// all, so a caller can distinguish "no entry" from "entry exists but
    /// is an unresolved forward declaration" (§3 invariant 1).
    pub fn find_type_raw(&self, name: &str, flag: u8) -> Option<TypeId> {
        for (id, ty) in self.types.iter_enumerated() {
            if !ty.type_name.eq_str(name) {
                continue;
            }
            match flag {
                1 if ty.is_struct_tag() => continue,
                2 if !ty.is_struct_tag() => continue,
                _ => {}
            }
            return Some(id);
        }
        None
    }

    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id]
    }

    pub fn get_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.types[id]
    }

    /// The type an arbitrary (possibly forward-declared) type entry
    /// actually describes: itself, or its resolved `base_struct`.
    pub fn resolve(&self, id: TypeId) -> &Type {
        let ty = self.get(id);
        if ty.size == 0 {
            if let Some(base) = ty.base_struct {
                return self.get(base);
            }
        }
        ty
    }

    /// `find_member` (§4.2): resolve `type_id` through a forward
    /// declaration if needed, then linear-scan its fields for `token`.
    pub fn find_member(&self, token: &str, type_id: TypeId) -> Option<usize> {
        self.resolve(type_id)
            .fields
            .iter()
            .position(|f| f.var_name.eq_str(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Symbol {
        Symbol::intern(s)
    }

    #[test]
    fn find_type_excludes_struct_tags_under_flag_one() {
        let mut table = TypeTable::new();
        table.add_type(Type::new(sym("S"), BaseType::Struct, 8));
        assert_eq!(table.find_type("S", 1), None);
        assert!(table.find_type("S", 2).is_some());
        assert!(table.find_type("S", 0).is_some());
    }

    #[test]
    fn forward_declared_typedef_resolves_to_its_struct() {
        let mut table = TypeTable::new();
        let s = table.add_type(Type::new(sym("S"), BaseType::Struct, 8));
        let mut fwd = Type::forward_declared_typedef(sym("T"));
        fwd.base_struct = Some(s);
        table.add_type(fwd);

        assert_eq!(table.find_type("T", 0), Some(s));
        assert_eq!(table.get(table.find_type("T", 0).unwrap()).size, 8);
    }

    #[test]
    fn find_member_follows_forward_declaration() {
        let mut table = TypeTable::new();
        let s = table.add_type(
            Type::new(sym("S"), BaseType::Struct, 8)
                .with_fields(vec![Var::new(sym("x"), sym("int"))]),
        );
        let mut fwd = Type::forward_declared_typedef(sym("T"));
        fwd.base_struct = Some(s);
        let t = table.add_type(fwd);

        assert_eq!(table.find_member("x", t), Some(0));
        assert_eq!(table.find_member("missing", t), None);
    }
}
