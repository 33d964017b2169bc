//! Fixed-width row rendering
//!
//! A row is rendered as its name followed by one field per value. Every field
//! is left-justified and cut or padded to exactly `col_width` characters, and
//! fields are separated by a single space.

use std::fmt::Display;

/// Column width used by [`DataVector::print`](crate::vector::DataVector::print)
pub const DEFAULT_FORMAT_WIDTH: usize = 10;

/// Render `name` and `values` as one fixed-width line.
///
/// The output is `(1 + values.len()) * col_width + values.len()` characters long.
pub fn format_row<E: Display>(name: &str, values: &[E], col_width: usize) -> String {
    let mut out = String::with_capacity((1 + values.len()) * (col_width + 1));
    push_field(&mut out, name, col_width);
    for value in values {
        out.push(' ');
        push_field(&mut out, &value.to_string(), col_width);
    }
    out
}

fn push_field(out: &mut String, text: &str, width: usize) {
    let mut written = 0;
    for ch in text.chars().take(width) {
        out.push(ch);
        written += 1;
    }
    out.extend(std::iter::repeat(' ').take(width - written));
}
