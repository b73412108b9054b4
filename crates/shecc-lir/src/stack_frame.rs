//! Growing a function's stack frame as locals are lowered into it
//! (`func_t::stack_size`, §3).

use shecc_sem::Func;

/// Reserve `size` bytes at the bottom of `func`'s frame and return the
/// (negative) byte offset of the new slot relative to the frame base.
/// `stack_size` starts at 4 (§3) and only ever grows — there is no
/// per-slot deallocation, matching the arena-wide "no individual element
/// is freed" lifecycle (§3 Lifecycle).
pub fn alloc_stack_slot(func: &mut Func, size: u32) -> i32 {
    let offset = -(func.stack_size as i32);
    func.stack_size += size;
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use shecc_sem::Func;
    use shecc_util::Symbol;

    #[test]
    fn stack_size_starts_at_four_and_only_grows() {
        let mut func = Func::new(Symbol::intern("f"), Symbol::intern("int"));
        assert_eq!(func.stack_size, 4);

        let a = alloc_stack_slot(&mut func, 4);
        let b = alloc_stack_slot(&mut func, 8);

        assert_eq!(a, -4);
        assert_eq!(b, -8);
        assert_eq!(func.stack_size, 16);
    }
}
