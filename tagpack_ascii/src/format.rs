use std::fmt::Write;

use tagpack::{Sequence, Value};

/// Formats a Value as human-readable ASCII text.
pub fn to_ascii(value: &Value) -> String {
    let mut output = String::new();
    format_value(&mut output, value, 0);
    output
}

/// Formats every item of a packet inside a `packet { ... }` block.
pub fn sequence_to_ascii(packet: &Sequence) -> String {
    let mut output = String::from("packet");
    format_block(&mut output, packet.iter().map(|item| item.value()), 0);
    output
}

/// Formats a value with the given indentation level.
fn format_value(output: &mut String, value: &Value, indent: usize) {
    match value {
        Value::UInt(n) => write!(output, "{}u", n).unwrap(),
        Value::Float(n) => write!(output, "{}f", n).unwrap(),
        Value::Bytes(b) => match std::str::from_utf8(b) {
            Ok(s) => format_string_literal(output, s),
            Err(_) => format_raw_bytes(output, b),
        },
        Value::List(items) => {
            output.push_str("list");
            format_block(output, items.iter(), indent);
        }
    }
}

/// Formats ` { ... }` with one item per line, or ` {}` when there are none.
fn format_block<'a>(output: &mut String, items: impl Iterator<Item = &'a Value>, indent: usize) {
    let indent_str = "  ".repeat(indent);
    let mut items = items.peekable();

    output.push_str(" {");
    if items.peek().is_none() {
        output.push('}');
        return;
    }

    output.push('\n');
    for item in items {
        output.push_str(&indent_str);
        output.push_str("  ");
        format_value(output, item, indent + 1);
        output.push_str(",\n");
    }
    output.push_str(&indent_str);
    output.push('}');
}

/// Formats a string as a quoted literal with escapes.
fn format_string_literal(output: &mut String, s: &str) {
    output.push('"');
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_ascii_control() => write!(output, "\\x{:02x}", c as u32).unwrap(),
            c => output.push(c),
        }
    }
    output.push('"');
}

/// Formats non-UTF-8 data as space-separated hex.
fn format_raw_bytes(output: &mut String, b: &[u8]) {
    output.push_str("bytes(");
    for (i, byte) in b.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        write!(output, "{:02x}", byte).unwrap();
    }
    output.push(')');
}
