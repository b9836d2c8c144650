use crate::ast;
use crate::Documentation;
use std::sync::Arc;

/// The raw text of a schema document, kept around after parsing so that the
/// `#` comments graphql_parser discards can be recovered for each element.
///
/// Cloning is cheap; the text is shared.
#[derive(Clone, Debug)]
pub struct SourceText {
    chars: Arc<[char]>,
    line_starts: Arc<[usize]>,
    token_offsets: Arc<[(PosKey, usize)]>,
}
impl SourceText {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut line_starts = vec![0];
        line_starts.extend(
            chars.iter()
                .enumerate()
                .filter(|(_, ch)| **ch == '\n')
                .map(|(idx, _)| idx + 1),
        );
        let token_offsets = token_offsets(&chars);
        Self {
            chars: chars.into(),
            line_starts: line_starts.into(),
            token_offsets: token_offsets.into(),
        }
    }

    /// Builds the [`Documentation`] of the element whose first token (its
    /// name or keyword, never its description) sits at `pos`.
    pub(crate) fn documentation(
        &self,
        pos: &ast::Pos,
        description: &Option<String>,
    ) -> Documentation {
        Documentation::new(
            self.leading_comments(pos, description.is_some()),
            description.to_owned(),
        )
    }

    /// Returns the `#` comment lines (marker stripped) that sit between the
    /// previous token and the element at `pos`.
    ///
    /// When `has_description` is set and `pos` points past the element's
    /// description, the comments are looked up in front of the description
    /// literal instead. A comment trailing the previous token's line belongs
    /// to the element as well. Blank comment lines are dropped.
    pub fn leading_comments(
        &self,
        pos: &ast::Pos,
        has_description: bool,
    ) -> Vec<String> {
        let Some(mut offset) = self.offset_of(pos) else {
            return vec![];
        };

        if has_description && self.chars.get(offset) != Some(&'"') {
            match self.description_start(offset) {
                Some(description_offset) => offset = description_offset,
                None => return vec![],
            }
        }

        let line_idx = self.line_of(offset);
        let line_start = self.line_starts[line_idx];
        let preceded_on_same_line =
            self.chars[line_start..offset].iter().any(|ch| !is_ignored(*ch));
        if preceded_on_same_line {
            return vec![];
        }

        let mut comments = vec![];
        let mut idx = line_idx;
        while idx > 0 {
            idx -= 1;
            let line = self.line(idx);
            let content_start = line.iter().position(|ch| !is_ignored(*ch));
            let Some(content_start) = content_start else {
                continue;
            };

            if line[content_start] == '#' {
                comments.push(line[content_start + 1..].iter().collect());
                continue;
            }

            if let Some(comment_start) = trailing_comment_start(line) {
                comments.push(line[comment_start + 1..].iter().collect());
            }
            break;
        }

        comments.reverse();
        comments.retain(|comment: &String| !comment.trim().is_empty());
        comments
    }

    /// Walks backwards from `offset` over ignored tokens to the closing quote
    /// of a description and returns the offset of its opening quote.
    fn description_start(&self, offset: usize) -> Option<usize> {
        let mut end = offset.min(self.chars.len());
        while end > 0 && is_ignored(self.chars[end - 1]) {
            end -= 1;
        }
        if end == 0 || self.chars[end - 1] != '"' {
            return None;
        }

        let is_block_string =
            end >= 6 && self.chars[end - 3..end] == ['"', '"', '"'];
        if is_block_string {
            let mut start = end - 6;
            loop {
                let is_unescaped_quotes =
                    self.chars[start..start + 3] == ['"', '"', '"']
                    && (start == 0 || self.chars[start - 1] != '\\');
                if is_unescaped_quotes {
                    return Some(start);
                }
                if start == 0 {
                    return None;
                }
                start -= 1;
            }
        }

        let line_start = self.line_starts[self.line_of(end - 1)];
        let mut start = end - 1;
        while start > line_start {
            start -= 1;
            if self.chars[start] == '"' && !self.is_escaped(start) {
                return Some(start);
            }
        }
        None
    }

    fn is_escaped(&self, offset: usize) -> bool {
        let backslashes =
            self.chars[..offset].iter()
                .rev()
                .take_while(|ch| **ch == '\\')
                .count();
        backslashes % 2 == 1
    }

    /// The characters of the line at `idx`, without its line terminator.
    fn line(&self, idx: usize) -> &[char] {
        let start = self.line_starts[idx];
        let end =
            self.line_starts.get(idx + 1)
                .map(|next_start| next_start - 1)
                .unwrap_or(self.chars.len());
        let line = &self.chars[start..end];
        line.strip_suffix(&['\r']).unwrap_or(line)
    }

    fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        }
    }

    fn offset_of(&self, pos: &ast::Pos) -> Option<usize> {
        let idx =
            self.token_offsets
                .binary_search_by_key(&(pos.line, pos.column), |(key, _)| *key)
                .ok()?;
        Some(self.token_offsets[idx].1)
    }
}

/// A graphql_parser `(line, column)` pair.
type PosKey = (usize, usize);

/// Pairs the offset of every character that belongs to a token with the
/// position graphql_parser reports for it.
///
/// graphql_parser's positions are not plain char counts: between tokens a
/// tab advances the column by 8, `\r` and BOMs advance nothing, and a `#`
/// comment ended by `\r\n` counts as two lines. Positions only grow from
/// one token char to the next, so the result is sorted by position.
fn token_offsets(chars: &[char]) -> Vec<(PosKey, usize)> {
    let mut offsets = vec![];
    let (mut line, mut column) = (1, 1);
    let mut idx = 0;
    while idx < chars.len() {
        match chars[idx] {
            '\u{feff}' | '\r' => idx += 1,
            '\t' => {
                column += 8;
                idx += 1;
            },
            '\n' => {
                line += 1;
                column = 1;
                idx += 1;
            },
            ' ' | ',' => {
                column += 1;
                idx += 1;
            },
            '#' => {
                idx += 1;
                while let Some(ch) = chars.get(idx) {
                    idx += 1;
                    if *ch == '\r' || *ch == '\n' {
                        line += 1;
                        column = 1;
                        break;
                    }
                }
            },
            '"' => {
                let end = string_end(chars, idx);
                for offset in idx..end {
                    offsets.push(((line, column), offset));
                    if chars[offset] == '\n' {
                        line += 1;
                        column = 1;
                    } else {
                        column += 1;
                    }
                }
                idx = end;
            },
            _ => {
                offsets.push(((line, column), idx));
                column += 1;
                idx += 1;
            },
        }
    }
    offsets
}

/// The offset just past the string literal opening at `start`.
fn string_end(chars: &[char], start: usize) -> usize {
    let is_block_string = chars.get(start..start + 3) == Some(&['"', '"', '"'][..]);
    if is_block_string {
        let mut idx = start + 3;
        while idx + 3 <= chars.len() {
            let closes =
                chars[idx..idx + 3] == ['"', '"', '"']
                && (idx == start + 3 || chars[idx - 1] != '\\');
            if closes {
                return idx + 3;
            }
            idx += 1;
        }
        return chars.len();
    }

    let mut escaped = false;
    for (idx, ch) in chars.iter().enumerate().skip(start + 1) {
        match ch {
            '"' if !escaped => return idx + 1,
            '\n' => return idx,
            _ => (),
        }
        escaped = !escaped && *ch == '\\';
    }
    chars.len()
}

fn is_ignored(ch: char) -> bool {
    ch.is_whitespace() || ch == ',' || ch == '\u{feff}'
}

/// Finds a `#` comment at the end of a line of code, skipping any `#` that
/// appears inside a string literal.
fn trailing_comment_start(line: &[char]) -> Option<usize> {
    let mut in_string = false;
    let mut escaped = false;
    for (idx, ch) in line.iter().enumerate() {
        match ch {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '#' if !in_string => return Some(idx),
            _ => (),
        }
    }
    None
}
