//! Rune cursor over template source.
//!
//! The cursor walks the source one decoded `char` at a time and remembers
//! the encoded width of the last one it consumed, so a single step can be
//! undone with [`Cursor::back_up`]. Bulk moves (`advance_by`, the memchr
//! skips) forget that width: pushback is only valid right after a `bump`.
//!
//! All positions are byte offsets into the source and always fall on
//! `char` boundaries.

/// Cursor over a template source string.
///
/// The cursor is [`Copy`], so a state can snapshot it for lookahead without
/// touching the lexer's real position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Current read position (byte offset).
    pos: usize,
    /// Encoded width of the last `char` consumed by `bump` (0 at EOF).
    width: usize,
    /// Whether `back_up` is allowed: set by `bump`, cleared by every other move.
    can_back_up: bool,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            width: 0,
            can_back_up: false,
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.src.len()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The unread remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Consume and return the next `char`, or `None` at EOF.
    ///
    /// Advances by the encoded width of the character. At EOF the recorded
    /// width is 0, so a following `back_up` is a no-op.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.rest().chars().next();
        self.width = c.map_or(0, char::len_utf8);
        self.pos += self.width;
        self.can_back_up = true;
        c
    }

    /// Return the next `char` without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Step back over the `char` returned by the last `bump`.
    ///
    /// Valid once per `bump`.
    #[inline]
    pub fn back_up(&mut self) {
        debug_assert!(self.can_back_up, "back_up without a preceding bump");
        if self.can_back_up {
            self.pos -= self.width;
            self.can_back_up = false;
        }
    }

    /// Returns `true` if the unread input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Skip `n` bytes already known to be present (delimiters, markers).
    ///
    /// # Contract
    ///
    /// `pos + n` must land on a `char` boundary within the source.
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        debug_assert!(
            self.src.is_char_boundary(self.pos + n),
            "advance_by({n}) from {} splits a char",
            self.pos
        );
        self.pos += n;
        self.can_back_up = false;
    }

    /// Advance while `pred` holds for the next `char`.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        let run: usize = self
            .rest()
            .chars()
            .take_while(|&c| pred(c))
            .map(char::len_utf8)
            .sum();
        self.pos += run;
        self.can_back_up = false;
    }

    /// Byte distance from the cursor to the next occurrence of `needle`.
    pub fn find(&self, needle: &str) -> Option<usize> {
        memchr::memmem::find(self.rest().as_bytes(), needle.as_bytes())
    }

    /// Advance to the next occurrence of either byte, or to EOF.
    ///
    /// Returns `false` if neither byte occurs. Both bytes must be the
    /// leading byte of a `char` (ASCII or a UTF-8 lead byte) so the cursor
    /// lands on a boundary.
    pub fn skip_to_either(&mut self, a: u8, b: u8) -> bool {
        self.can_back_up = false;
        if let Some(off) = memchr::memchr2(a, b, self.rest().as_bytes()) {
            self.pos += off;
            true
        } else {
            self.pos = self.src.len();
            false
        }
    }

    /// Advance past ordinary string content to the next `"`, `\` or `\n`.
    ///
    /// Returns the byte found without consuming it, or `None` at EOF.
    pub fn skip_to_string_delim(&mut self) -> Option<u8> {
        self.can_back_up = false;
        let bytes = self.rest().as_bytes();
        if let Some(off) = memchr::memchr3(b'"', b'\\', b'\n', bytes) {
            self.pos += off;
            Some(bytes[off])
        } else {
            self.pos = self.src.len();
            None
        }
    }

    /// Source text between `start` and the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} exceeds {}", self.pos);
        &self.src[start..self.pos]
    }
}

#[cfg(test)]
mod tests;
