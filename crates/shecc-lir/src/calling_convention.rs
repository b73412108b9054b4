//! The fixed-size physical register file the (out-of-scope) register
//! allocator mutates (§1: "only the data it mutates — liveness ranges, a
//! fixed-size register file — is modeled here").

use shecc_util::Symbol;

/// One of the target's general-purpose registers. The reference source
/// targets a 32-bit RISC-style ISA with a small, fixed register set; the
/// exact count is a back-end concern, so this crate picks a plausible
/// size (16) rather than asserting one the spec does not name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysReg(pub u8);

pub const NUM_PHYS_REGS: u8 = 16;

/// One slot of the register file: which variable currently occupies it
/// (if any) and the liveness range the allocator reasons about when
/// deciding whether to spill it.
#[derive(Debug, Clone, Default)]
pub struct RegSlot {
    pub assigned_var: Option<Symbol>,
    pub live_from: u32,
    pub live_to: u32,
}

/// The fixed-size register file a calling-convention-aware allocator
/// assigns variables into. This crate models only the data the allocator
/// reads and mutates, not the allocation algorithm itself (§1).
pub struct RegisterFile {
    slots: Vec<RegSlot>,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            slots: vec![RegSlot::default(); NUM_PHYS_REGS as usize],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, reg: PhysReg) -> &RegSlot {
        &self.slots[reg.0 as usize]
    }

    /// Bind `var` into `reg` for the IR index range `[from, to]`.
    pub fn assign(&mut self, reg: PhysReg, var: Symbol, from: u32, to: u32) {
        self.slots[reg.0 as usize] = RegSlot {
            assigned_var: Some(var),
            live_from: from,
            live_to: to,
        };
    }

    pub fn free(&mut self, reg: PhysReg) {
        self.slots[reg.0 as usize] = RegSlot::default();
    }

    /// The first register not currently bound to a variable, if any.
    pub fn first_free(&self) -> Option<PhysReg> {
        self.slots
            .iter()
            .position(|s| s.assigned_var.is_none())
            .map(|i| PhysReg(i as u8))
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_register_file_has_every_slot_free() {
        let file = RegisterFile::new();
        assert_eq!(file.len(), NUM_PHYS_REGS as usize);
        assert!(file.first_free().is_some());
    }

    #[test]
    fn assigning_and_freeing_a_register_round_trips() {
        let mut file = RegisterFile::new();
        let reg = file.first_free().unwrap();
        file.assign(reg, Symbol::intern("x"), 3, 9);
        assert_eq!(file.get(reg).assigned_var, Some(Symbol::intern("x")));
        file.free(reg);
        assert_eq!(file.get(reg).assigned_var, None);
    }
}
