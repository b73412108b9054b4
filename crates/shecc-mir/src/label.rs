//! The label table (§4.6): filled in by the (out-of-scope) back-end
//! during code emission, scanned linearly to resolve forward jumps.

use shecc_util::Symbol;

/// `LABEL_LUT`: a flat (name, byte offset) list, capped at §6's
/// `MAX_LABEL`.
#[derive(Default)]
pub struct LabelTable {
    entries: Vec<(Symbol, i64)>,
    max_label: usize,
}

impl LabelTable {
    pub fn new(max_label: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_label,
        }
    }

    /// `add_label(name, offset)` (§4.6): append unconditionally — a name
    /// may legitimately appear more than once across relocations, and
    /// `find_label_offset` always means the first one.
    pub fn add_label(&mut self, name: Symbol, offset: i64) -> shecc_util::CoreResult<()> {
        if self.entries.len() >= self.max_label {
            return Err(shecc_util::CoreError::CapacityExceeded {
                table: "LABEL_LUT",
                max: self.max_label,
            });
        }
        self.entries.push((name, offset));
        Ok(())
    }

    /// `find_label_offset(name)` (§4.6): first match, or `-1` if none.
    pub fn find_label_offset(&self, name: &str) -> i64 {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_str(name))
            .map(|(_, off)| *off)
            .unwrap_or(-1)
    }
}
