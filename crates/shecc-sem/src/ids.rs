//! Typed arena indices for every entity kind in the symbol universe (§9,
//! "pointer-heavy graphs → arena + index"). Each newtype wraps a `u32` and
//! implements [`Idx`] so it can key an [`IndexVec`].

use shecc_util::Idx;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl Idx for $name {
            fn from_usize(idx: usize) -> Self {
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_id!(VarId);
define_id!(TypeId);
define_id!(FuncId);
define_id!(BlockId);
define_id!(MacroId);
define_id!(AliasId);
define_id!(ConstantId);
