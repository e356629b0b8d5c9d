use crate::terminal::output::OutputBuffer;

/// The inverse-video line above the message bar: a left-aligned part and a
/// right-aligned part.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBar {
    pub left: String,
    pub right: String,
}

impl StatusBar {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Lay the line out in exactly `width` columns.
    ///
    /// The left part is cut to `width`. Spaces follow until the right part
    /// fits flush against the right edge; if it never fits exactly, the line
    /// is padded with spaces only.
    pub fn compose(&self, width: usize) -> Vec<u8> {
        let left = self.left.as_bytes();
        let right = self.right.as_bytes();

        let mut line = Vec::with_capacity(width);
        line.extend_from_slice(&left[..left.len().min(width)]);

        while line.len() < width {
            if width - line.len() == right.len() {
                line.extend_from_slice(right);
                break;
            }
            line.push(b' ');
        }

        line
    }

    pub fn render(&self, out: &mut OutputBuffer, width: usize) {
        out.inverse_on();
        out.write_raw(&self.compose(width));
        out.attrs_off();
        out.write_raw(b"\r\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_part_is_flush_right() {
        let bar = StatusBar::new("notes.txt - 2 lines", "1/2");
        let line = bar.compose(30);

        assert_eq!(line.len(), 30);
        assert!(line.starts_with(b"notes.txt - 2 lines"));
        assert!(line.ends_with(b" 1/2"));
    }

    #[test]
    fn test_left_part_truncated_drops_right() {
        let bar = StatusBar::new("a very long status line", "10/20");
        assert_eq!(bar.compose(6), b"a very");
    }

    #[test]
    fn test_render_wraps_in_inverse_video() {
        let mut out = OutputBuffer::new();
        StatusBar::new("x", "y").render(&mut out, 3);
        assert_eq!(out.as_bytes(), b"\x1b[7mx y\x1b[m\r\n");
    }
}
