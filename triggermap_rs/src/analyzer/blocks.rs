//! Brace-balance matching for handler blocks.
//!
//! This is a heuristic over raw text, not a parser. When the braces never
//! balance, the block runs to the last line of the source.

use serde::Deserialize;

const OPEN: char = '{';
const CLOSE: char = '}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockScanMode {
    /// Every `{` / `}` counts, including ones inside strings and comments.
    #[default]
    Naive,
    /// Skips delimiters inside quoted literals and `#` comments.
    LiteralAware,
}

/// Returns the 0-based index of the line closing the block that starts at
/// `start_idx`. Never returns an index before `start_idx`.
pub fn find_block_end(lines: &[&str], start_idx: usize, mode: BlockScanMode) -> usize {
    let last = lines.len().saturating_sub(1);
    if start_idx >= lines.len() {
        return start_idx.max(last);
    }

    let mut depth: i64 = 0;
    let mut started = false;
    let mut literal = LiteralState::default();

    for (idx, line) in lines.iter().enumerate().skip(start_idx) {
        for ch in line.chars() {
            if mode == BlockScanMode::LiteralAware && literal.consume(ch) {
                continue;
            }
            match ch {
                OPEN => {
                    depth += 1;
                    started = true;
                }
                CLOSE => depth -= 1,
                _ => {}
            }
        }
        literal.end_line();
        if started && depth == 0 {
            return idx;
        }
    }
    last
}

/// Tracks whether the scanner sits inside a string literal or a comment.
#[derive(Debug, Default)]
struct LiteralState {
    quote: Option<char>,
    escaped: bool,
    in_comment: bool,
}

impl LiteralState {
    /// Feeds one character; returns `true` when it belongs to a literal or
    /// comment and must not be counted.
    fn consume(&mut self, ch: char) -> bool {
        if self.in_comment {
            return true;
        }
        if let Some(quote) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if ch == '\\' {
                self.escaped = true;
            } else if ch == quote {
                self.quote = None;
            }
            return true;
        }
        match ch {
            '"' | '\'' | '`' => {
                self.quote = Some(ch);
                true
            }
            '#' => {
                self.in_comment = true;
                true
            }
            _ => false,
        }
    }

    // Strings may span lines, comments may not.
    fn end_line(&mut self) {
        self.in_comment = false;
        self.escaped = false;
    }
}
