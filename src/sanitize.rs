//! Turning ArnLike glob sections into anchored regular expressions.
//!
//! Only `*` (any sequence, possibly empty) and `?` (exactly one character)
//! are wildcards. Every regex metacharacter is escaped so it matches itself,
//! which lets resources such as `some/[resource]{with}\metacharacters` be
//! matched literally. There is no escape syntax for a literal `*` or `?`.

use std::borrow::Cow;

use crate::arn::{Arn, ARN_SECTIONS};

const METACHARACTERS: &[u8] = br"\.+()|[]{}^$";

static SPECIAL: [bool; 128] = special_table();

const fn special_table() -> [bool; 128] {
    let mut table = [false; 128];
    let mut i = 0;
    while i < METACHARACTERS.len() {
        table[METACHARACTERS[i] as usize] = true;
        i += 1;
    }
    table
}

fn is_special(c: char) -> bool {
    c.is_ascii() && SPECIAL[c as usize]
}

fn needs_rewrite(c: char) -> bool {
    c == '*' || c == '?' || is_special(c)
}

/// Escape regex metacharacters in `section` and translate wildcards.
///
/// A run of `*` becomes a single `.*`; `?` becomes `.`. Returns the input
/// unchanged when nothing needs rewriting.
pub fn quote_meta(section: &str) -> Cow<'_, str> {
    let Some(start) = section.find(needs_rewrite) else {
        return Cow::Borrowed(section);
    };

    let mut out = String::with_capacity(section.len() * 2);
    out.push_str(&section[..start]);

    let mut prev_star = false;
    for c in section[start..].chars() {
        match c {
            '*' => {
                if !prev_star {
                    out.push_str(".*");
                }
            }
            '?' => out.push('.'),
            c if is_special(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
        prev_star = c == '*';
    }

    Cow::Owned(out)
}

/// Require the expression to span the whole section.
pub fn anchor(expr: &str) -> String {
    format!("^{}$", expr)
}

/// Sanitize and anchor every section of a parsed pattern.
pub fn sanitize_sections(pattern: &Arn<'_>) -> [String; ARN_SECTIONS] {
    let sections = *pattern.sections();
    sections.map(|section| anchor(&quote_meta(section)))
}
