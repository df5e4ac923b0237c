//! Detector for function, arrow and method parameters.
//!
//! Parameter lists are located by their heads, then split on top-level
//! commas:
//!
//! ```text
//! function NAME(a, b)
//! (a, b) => ...           x => ...
//! NAME(a, b) {            constructor(private a: A) {
//! ```
//!
//! Rest markers (`...`), accessibility modifiers, type annotations, default
//! values and optional markers are dropped; destructured parameters and a
//! leading `this` annotation are skipped.

use crate::functions::METHOD_MODIFIERS;
use crate::patterns::{capture_names, compile, Found, NOT_CALLABLE};
use labinsight_core::{Declaration, Detector, IdentifierKind};
use regex::Regex;
use std::ops::Range;

/// Modifiers allowed in front of a parameter name.
const PARAMETER_MODIFIERS: &[&str] = &["public", "private", "protected", "readonly", "override"];

/// Detects parameter names.
pub struct ParameterDetector {
    function_head: Regex,
    method_head: Regex,
    method_body: Regex,
    arrow_tail: Regex,
    bare_arrow: Regex,
}

impl ParameterDetector {
    /// Creates the detector.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            function_head: compile(r"\bfunction\b\s*\*?\s*(?:{ident})?\s*(?:<[^>\n]*>)?\s*\(")?,
            method_head: compile(&format!(
                r"(?m)^[ \t]*{METHOD_MODIFIERS}({{ident}})\s*(?:<[^>\n]*>)?\s*\("
            ))?,
            method_body: Regex::new(r"\A\s*(?::[^{;]*)?\{")?,
            arrow_tail: Regex::new(r"\)\s*(?::[^=;{}\n]*)?=>")?,
            bare_arrow: compile(r"(?m)(?:^|[=(,\[{?>]|\breturn|\basync)\s*({ident})\s*=>")?,
        })
    }
}

impl Detector for ParameterDetector {
    fn name(&self) -> &'static str {
        "parameters"
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Parameter
    }

    fn detect(&self, text: &str) -> Vec<Declaration> {
        let mut found = Found::new();

        for m in self.function_head.find_iter(text) {
            let open = m.end() - 1;
            if let Some(close) = closing_paren(text, open) {
                collect_list(text, m.start()..close + 1, open + 1, close, &mut found);
            }
        }

        for caps in self.method_head.captures_iter(text) {
            let (Some(head), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if NOT_CALLABLE.contains(&name.as_str()) {
                continue;
            }
            let open = head.end() - 1;
            if let Some(close) = closing_paren(text, open) {
                if self.method_body.is_match(&text[close + 1..]) {
                    collect_list(text, name.start()..close + 1, open + 1, close, &mut found);
                }
            }
        }

        for m in self.arrow_tail.find_iter(text) {
            let close = m.start();
            if let Some(open) = opening_paren(text, close) {
                collect_list(text, open..m.end(), open + 1, close, &mut found);
            }
        }

        capture_names(&self.bare_arrow, text, &mut found);

        found.into_values().collect()
    }
}

/// Index of the `)` matching the `(` at `open`.
fn closing_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Index of the `(` matching the `)` at `close`.
fn opening_paren(text: &str, close: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in text.as_bytes()[..=close].iter().enumerate().rev() {
        match *b {
            b')' => depth += 1,
            b'(' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Records the parameters of the list spanning `text[start..end]`.
///
/// `head` covers the whole construct through the closing paren; it becomes
/// the matched text so the declaration is located on the head's line.
fn collect_list(text: &str, head: Range<usize>, start: usize, end: usize, found: &mut Found) {
    let list = &text[start..end];
    for (segment_start, segment) in split_top_level(list) {
        if let Some((rel, name)) = parameter_name(segment) {
            let offset = start + segment_start + rel;
            found
                .entry(offset)
                .or_insert_with(|| Declaration::new(name, matched_text(text, &head, offset), offset));
        }
    }
}

/// The head itself when it fits on one line, otherwise the line holding
/// `offset`.
fn matched_text<'t>(text: &'t str, head: &Range<usize>, offset: usize) -> &'t str {
    let head_text = &text[head.clone()];
    if !head_text.contains('\n') {
        return head_text.trim();
    }
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[offset..].find('\n').map_or(text.len(), |i| offset + i);
    text[line_start..line_end].trim()
}

/// Splits a parameter list on commas outside brackets and generics.
fn split_top_level(list: &str) -> Vec<(usize, &str)> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut prev = 0u8;

    for (i, b) in list.bytes().enumerate() {
        match b {
            b'(' | b'[' | b'{' | b'<' => depth += 1,
            // arrow in a function type
            b'>' if prev == b'=' => {}
            b')' | b']' | b'}' | b'>' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                segments.push((start, &list[start..i]));
                start = i + 1;
            }
            _ => {}
        }
        prev = b;
    }
    segments.push((start, &list[start..]));
    segments
}

/// Returns the byte position and text of the name declared by one segment.
fn parameter_name(segment: &str) -> Option<(usize, &str)> {
    let mut rest = segment.trim_start();
    let mut pos = segment.len() - rest.len();

    loop {
        if let Some(after) = rest.strip_prefix("...") {
            pos += 3;
            rest = after;
            continue;
        }
        let word = &rest[..ident_len(rest)];
        let tail = &rest[word.len()..];
        if PARAMETER_MODIFIERS.contains(&word) && tail.starts_with(char::is_whitespace) {
            let after = tail.trim_start();
            pos += rest.len() - after.len();
            rest = after;
            continue;
        }
        break;
    }

    let name = &rest[..ident_len(rest)];
    if name.is_empty() || name == "this" {
        None
    } else {
        Some((pos, name))
    }
}

fn ident_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'$')
        .count()
}
