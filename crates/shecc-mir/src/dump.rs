//! `dump_ph1_ir` (§4.7): a textual dump of the Phase-1 IR stream.

use crate::ir::{Ph1Insn, Ph1IrBuilder};
use crate::opcode::Opcode;

/// Render `builder`'s `PH1_IR` stream as human-readable text, one
/// instruction per line. Block nesting is tracked by an indent counter:
/// `OP_block_start` prints `{` at the *current* (pre-increment) depth and
/// only then increments; `OP_block_end` decrements first and prints `}`
/// at that same, now-current depth — both braces land at the depth of the
/// code *around* the block, not the code inside it. `OP_label` always
/// prints flush-left (indent 0) regardless of nesting depth. An
/// unrecognized opcode prints nothing but still terminates its line.
pub fn dump_ph1_ir(builder: &Ph1IrBuilder) -> String {
    let mut out = String::new();
    let mut indent: usize = 0;

    for (_, insn) in builder.ph1_ir().iter_enumerated() {
        match insn.opcode {
            Opcode::BlockStart => {
                write_line(&mut out, indent, "{");
                indent += 1;
            }
            Opcode::BlockEnd => {
                indent = indent.saturating_sub(1);
                write_line(&mut out, indent, "}");
            }
            Opcode::Label => match format_insn(insn) {
                Some(text) => write_line(&mut out, 0, &text),
                None => out.push('\n'),
            },
            _ => match format_insn(insn) {
                Some(text) => write_line(&mut out, indent, &text),
                None => out.push('\n'),
            },
        }
    }

    out
}

fn write_line(out: &mut String, indent: usize, text: &str) {
    out.push_str(&"  ".repeat(indent));
    out.push_str(text);
    out.push('\n');
}

fn type_text(insn: &Ph1Insn, base: &str) -> String {
    let mut s = base.to_string();
    for _ in 0..insn.ptr_depth {
        s.push('*');
    }
    s
}

/// The fixed textual form for one instruction (§6). Returns `None` for an
/// opcode this dumper does not recognize.
fn format_insn(insn: &Ph1Insn) -> Option<String> {
    let v = |s: Option<shecc_util::Symbol>| s.map(|s| s.as_str().to_string()).unwrap_or_default();

    Some(match insn.opcode {
        Opcode::Define => {
            let retty = type_text(insn, &v(insn.type_name));
            let params = insn
                .params
                .iter()
                .map(|(ty, ptr, name)| {
                    let stars = "*".repeat(*ptr as usize);
                    format!("{ty}{stars} %{name}", ty = ty.as_str(), name = name.as_str())
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("def {retty} @{}({params})", v(insn.func_name))
        }
        Opcode::Allocat => {
            let ty = type_text(insn, &v(insn.type_name));
            match insn.size {
                Some(n) if n > 0 => format!("allocat {ty} %{}[{n}]", v(insn.dest)),
                _ => format!("allocat {ty} %{}", v(insn.dest)),
            }
        }
        Opcode::LoadConstant => format!("const %{}, ${}", v(insn.dest), insn.imm.unwrap_or(0)),
        Opcode::LoadDataAddress => {
            format!("%{} = .data ({})", v(insn.dest), insn.imm.unwrap_or(0))
        }
        Opcode::AddressOf => format!("%{} = &(%{})", v(insn.dest), v(insn.src0)),
        Opcode::Assign => format!("%{} = %{}", v(insn.dest), v(insn.src0)),
        Opcode::Label => v(insn.name),
        Opcode::Jump => format!("j {}", v(insn.name)),
        Opcode::Branch => format!(
            "br %{}, {}, {}",
            v(insn.dest),
            v(insn.branch_then),
            v(insn.branch_else)
        ),
        Opcode::Push => format!("push %{}", v(insn.src0)),
        Opcode::Call => format!(
            "call @{}, {}",
            v(insn.func_name),
            insn.param_num.unwrap_or(0)
        ),
        Opcode::Indirect => format!("indirect call @(%{})", v(insn.src0)),
        Opcode::FuncRet => format!("retval %{}", v(insn.dest)),
        Opcode::Return => match insn.src0 {
            Some(_) => format!("ret %{}", v(insn.src0)),
            None => "ret".to_string(),
        },
        Opcode::Read => format!("%{} = (%{}), {}", v(insn.dest), v(insn.src0), insn.size.unwrap_or(4)),
        Opcode::Write => format!("(%{}) = %{}, {}", v(insn.dest), v(insn.src0), insn.size.unwrap_or(4)),
        Opcode::BlockStart | Opcode::BlockEnd => return None,
        // `neg` prints as a two-operand comma form, unlike the `%dest =
        // mnemonic %src0` shape the other unary opcodes share.
        Opcode::Neg => format!("neg %{}, %{}", v(insn.dest), v(insn.src0)),
        op if op.is_unary() => format!("%{} = {} %{}", v(insn.dest), op.mnemonic(), v(insn.src0)),
        op => format!(
            "%{} = {} %{}, %{}",
            v(insn.dest),
            op.mnemonic(),
            v(insn.src0),
            v(insn.src1)
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shecc_util::Symbol;

    fn sym(s: &str) -> Symbol {
        Symbol::intern(s)
    }

    #[test]
    fn dumps_a_minimal_identity_function_in_order() {
        let mut b = Ph1IrBuilder::new(8, 16);

        let def = b.add_ph1_ir(Opcode::Define).unwrap();
        {
            let insn = b.get_ph1_mut(def);
            insn.type_name = Some(sym("int"));
            insn.func_name = Some(sym("id"));
            insn.params.push((sym("int"), 0, sym("x")));
        }
        b.add_ph1_ir(Opcode::BlockStart).unwrap();
        let ret = b.add_ph1_ir(Opcode::Return).unwrap();
        b.get_ph1_mut(ret).src0 = Some(sym("x"));
        b.add_ph1_ir(Opcode::BlockEnd).unwrap();

        let dump = dump_ph1_ir(&b);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines, vec!["def int @id(int %x)", "{", "ret %x", "}"]);
    }

    #[test]
    fn both_braces_of_a_block_print_at_the_same_outer_depth() {
        // Nested blocks must indent only the instructions *inside* them —
        // both the opening and closing brace of each block sit at the
        // depth of the code around it, not the code it encloses.
        let mut b = Ph1IrBuilder::new(8, 16);
        b.add_ph1_ir(Opcode::BlockStart).unwrap();
        b.add_ph1_ir(Opcode::BlockStart).unwrap();
        let assign = b.add_ph1_ir(Opcode::Assign).unwrap();
        {
            let insn = b.get_ph1_mut(assign);
            insn.dest = Some(sym("a"));
            insn.src0 = Some(sym("b"));
        }
        b.add_ph1_ir(Opcode::BlockEnd).unwrap();
        b.add_ph1_ir(Opcode::BlockEnd).unwrap();

        let dump = dump_ph1_ir(&b);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines, vec!["{", "  {", "    %a = %b", "  }", "}"]);
    }

    #[test]
    fn a_label_prints_flush_left_inside_nested_blocks() {
        let mut b = Ph1IrBuilder::new(8, 16);
        b.add_ph1_ir(Opcode::BlockStart).unwrap();
        b.add_ph1_ir(Opcode::BlockStart).unwrap();
        let label = b.add_ph1_ir(Opcode::Label).unwrap();
        b.get_ph1_mut(label).name = Some(sym("L0"));
        b.add_ph1_ir(Opcode::BlockEnd).unwrap();
        b.add_ph1_ir(Opcode::BlockEnd).unwrap();

        let dump = dump_ph1_ir(&b);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines, vec!["{", "  {", "L0", "  }", "}"]);
    }

    #[test]
    fn call_prints_the_callee_and_its_argument_count() {
        let mut insn = blank(Opcode::Call);
        insn.func_name = Some(sym("f"));
        insn.param_num = Some(2);
        assert_eq!(format_insn(&insn), Some("call @f, 2".to_string()));
    }

    #[test]
    fn indirect_call_prints_the_dereferenced_callee() {
        let mut insn = blank(Opcode::Indirect);
        insn.src0 = Some(sym("fp"));
        assert_eq!(format_insn(&insn), Some("indirect call @(%fp)".to_string()));
    }

    #[test]
    fn func_ret_prints_as_retval() {
        let mut insn = blank(Opcode::FuncRet);
        insn.dest = Some(sym("r"));
        assert_eq!(format_insn(&insn), Some("retval %r".to_string()));
    }

    #[test]
    fn neg_prints_as_a_two_operand_comma_form() {
        let mut insn = blank(Opcode::Neg);
        insn.dest = Some(sym("a"));
        insn.src0 = Some(sym("b"));
        assert_eq!(format_insn(&insn), Some("neg %a, %b".to_string()));
    }

    #[test]
    fn an_unrecognized_opcode_still_terminates_its_line() {
        // BlockStart/BlockEnd are handled separately; every other opcode
        // in the table has a textual form, so this exercises the `None`
        // branch directly against `format_insn`.
        let insn = crate::ir::Ph1IrBuilder::new(1, 1);
        let _ = insn; // guard against dead-code warnings in this smoke test
        assert_eq!(format_insn(&blank(Opcode::BlockStart)), None);
    }

    fn blank(opcode: Opcode) -> Ph1Insn {
        Ph1Insn {
            opcode,
            dest: None,
            src0: None,
            src1: None,
            func_name: None,
            param_num: None,
            size: None,
            imm: None,
            name: None,
            branch_then: None,
            branch_else: None,
            type_name: None,
            ptr_depth: 0,
            params: Vec::new(),
        }
    }
}
