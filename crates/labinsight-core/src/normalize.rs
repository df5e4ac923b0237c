//! Comment and string stripping ahead of pattern matching.
//!
//! Identifier-like text inside comments and literals must not be mistaken for
//! declarations. [`normalize`] removes it while keeping every newline, so a
//! line number computed on the output is valid for the original text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Literal(char),
}

/// Strips comments and literal contents from source text.
///
/// - `// ...` and `/* ... */` comments are removed.
/// - The contents of `'...'`, `"..."` and `` `...` `` literals are removed;
///   the delimiters stay so the surrounding syntax still reads as an
///   expression (`let a = "";`).
/// - Newlines are always kept. A newline ends an unterminated `'` or `"`
///   literal; template literals may span lines.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut state = State::Code;

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::BlockComment;
                }
                '"' | '\'' | '`' => {
                    out.push(c);
                    state = State::Literal(c);
                }
                _ => out.push(c),
            },
            State::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                } else if c == '\n' {
                    out.push('\n');
                }
            }
            State::Literal(quote) => {
                if c == '\\' {
                    if chars.next() == Some('\n') {
                        out.push('\n');
                    }
                } else if c == quote {
                    out.push(c);
                    state = State::Code;
                } else if c == '\n' {
                    out.push('\n');
                    if quote != '`' {
                        state = State::Code;
                    }
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_line_comments() {
        assert_eq!(normalize("let a = 1; // const Bad_Name = 2;"), "let a = 1; ");
    }

    #[test]
    fn test_strips_block_comments_keeping_newlines() {
        let src = "a /* one\ntwo\nthree */ b";
        let out = normalize(src);
        assert_eq!(out, "a \n\n b");
        assert_eq!(out.lines().count(), src.lines().count());
    }

    #[test]
    fn test_strips_string_contents() {
        assert_eq!(
            normalize(r#"const x = "const Bad_Name = 1;";"#),
            r#"const x = "";"#
        );
        assert_eq!(normalize("const y = 'it''s';"), "const y = '''';");
    }

    #[test]
    fn test_honours_escapes() {
        assert_eq!(normalize(r#"s = "a \" b"; c"#), r#"s = ""; c"#);
    }

    #[test]
    fn test_template_literals_span_lines() {
        let src = "const t = `line1\nconst Bad_Name = 2;\n`;\nlet ok = 1;";
        let out = normalize(src);
        assert_eq!(out, "const t = `\n\n`;\nlet ok = 1;");
    }

    #[test]
    fn test_comment_markers_inside_strings_are_kept_out() {
        assert_eq!(normalize(r#"url = "http://x"; y"#), r#"url = ""; y"#);
    }

    #[test]
    fn test_unterminated_string_ends_at_newline() {
        let out = normalize("a = \"oops\nlet b = 1;");
        assert_eq!(out, "a = \"\nlet b = 1;");
    }

    #[test]
    fn test_preserves_line_count() {
        let src = "// c\n/* a\n b */\nlet x = `\n`;\n'q'\n";
        assert_eq!(
            normalize(src).matches('\n').count(),
            src.matches('\n').count()
        );
    }
}
