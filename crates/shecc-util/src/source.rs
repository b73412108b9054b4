//! The `error(msg)` contract (§4.8): a point-at-source diagnostic followed
//! by process termination.
//!
//! The formatting is split from the side effect so the contract is
//! testable (§8 scenario 6) without actually ending the test process.

/// Build the diagnostic text `error(msg)` prints, given the full source
/// buffer and the byte offset the error was raised at.
///
/// Scans backward from `source_idx` to the previous newline (or the start
/// of the buffer) to find the offending line, then underlines the column
/// at `source_idx` with spaces and a caret. Matches the reference source
/// byte-for-byte: for `source = "a b c\n"`, `source_idx = 2`, the returned
/// string's last two lines are `a b c` and `  ^ Error occurs here`.
pub fn format_error(source: &str, source_idx: usize, msg: &str) -> String {
    let bytes = source.as_bytes();
    let idx = source_idx.min(bytes.len());

    let start_idx = match bytes[..idx].iter().rposition(|&b| b == b'\n') {
        Some(newline_pos) => newline_pos + 1,
        None => 0,
    };

    let end_idx = bytes[start_idx..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|rel| start_idx + rel)
        .unwrap_or(bytes.len());

    let line = String::from_utf8_lossy(&bytes[start_idx..end_idx]);
    let column = idx.saturating_sub(start_idx);
    let underline = " ".repeat(column);

    format!(
        "Error {msg} at source location {source_idx}\n{line}\n{underline}^ Error occurs here\n"
    )
}

/// Print the diagnostic built by [`format_error`] and terminate the
/// process. There is no recovery (§7): compilation is all-or-nothing.
pub fn fatal_error(source: &str, source_idx: usize, msg: &str) -> ! {
    print!("{}", format_error(source, source_idx, msg));
    std::process::exit(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_the_offending_column() {
        let diagnostic = format_error("a b c\n", 2, "bad token");
        assert!(diagnostic.contains("a b c\n  ^ Error occurs here"));
    }

    #[test]
    fn finds_the_enclosing_line_in_a_multiline_buffer() {
        let source = "int x;\nint y = ;\nint z;\n";
        let diagnostic = format_error(source, 15, "expected expression");
        assert!(diagnostic.contains("int y = ;\n        ^ Error occurs here"));
    }

    #[test]
    fn handles_an_error_on_the_first_line() {
        let diagnostic = format_error("abc\n", 0, "oops");
        assert!(diagnostic.contains("abc\n^ Error occurs here"));
    }
}
