use std::ops::Range;

use unicode_width::UnicodeWidthChar;

/// Terminal cells occupied by a character.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Text content and cursor (byte offset) of a single-line input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Cells taken by the cursor block: the char under it, or one past the end.
    fn cursor_cells(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map_or(1, |c| char_width(c).max(1))
    }

    /// Byte range of the text that fits in `width` cells.
    ///
    /// With `follow_cursor` the window scrolls so the cursor block stays
    /// visible, otherwise it starts at the beginning of the text.
    pub fn visible_range(&self, width: usize, follow_cursor: bool) -> Range<usize> {
        let mut start = 0;

        if follow_cursor {
            let cursor_cells = self.cursor_cells();
            let prefix: usize = self.text[..self.cursor].chars().map(char_width).sum();
            if prefix + cursor_cells > width {
                let mut used = cursor_cells;
                start = self.cursor;
                for (offset, c) in self.text[..self.cursor].char_indices().rev() {
                    let w = char_width(c);
                    if used + w > width {
                        break;
                    }
                    used += w;
                    start = offset;
                }
            }
        }

        let mut end = start;
        let mut filled = 0;
        for c in self.text[start..].chars() {
            let w = char_width(c);
            if filled + w > width {
                break;
            }
            filled += w;
            end += c.len_utf8();
        }

        start..end
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .chars()
            .next_back()
            .map(|c| self.cursor - c.len_utf8())
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::default();
        for c in s.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("Janee");
        input.backspace();
        assert_eq!(input.text(), "Jane");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_edit_in_middle() {
        let mut input = typed("Doe");
        input.home();
        input.right();
        input.insert('x');
        assert_eq!(input.text(), "Dxoe");
        input.delete();
        assert_eq!(input.text(), "Dxe");
        input.end();
        input.delete();
        assert_eq!(input.text(), "Dxe");
    }

    #[test]
    fn test_short_text_is_fully_visible() {
        let input = typed("doj@farmingdale.edu");
        assert_eq!(input.visible_range(32, true), 0..input.text().len());
        assert_eq!(input.visible_range(32, false), 0..input.text().len());
    }

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let email = "abcdefghijklmnopqrstuvwxj@farmingdale.edu";
        let mut input = typed(email);
        assert_eq!(email.len(), 41);

        // One cell is kept for the cursor block past the end
        let range = input.visible_range(32, true);
        assert_eq!(range, 10..41);
        assert!(email[range].ends_with("@farmingdale.edu"));

        input.home();
        assert_eq!(input.visible_range(32, true), 0..32);
        assert_eq!(input.visible_range(32, false), 0..32);
    }

    #[test]
    fn test_wide_chars_counted_in_cells() {
        let input = typed(&"李".repeat(40));
        let cells = |r: Range<usize>| input.text()[r].chars().map(char_width).sum::<usize>();

        let unfocused = input.visible_range(32, false);
        assert_eq!(cells(unfocused.clone()), 32);
        assert_eq!(unfocused.start, 0);

        let focused = input.visible_range(32, true);
        assert!(cells(focused.clone()) < 32);
        assert_eq!(focused.end, input.text().len());
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut input = typed("aé");
        input.left();
        assert_eq!(input.cursor(), 1);
        input.backspace();
        assert_eq!(input.text(), "é");
        input.home();
        input.backspace();
        assert_eq!(input.text(), "é");
    }
}
