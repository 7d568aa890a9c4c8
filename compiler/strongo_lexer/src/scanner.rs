//! Hand-written state machine producing template tokens.
//!
//! Each lexical context is one [`State`]. A state method advances the
//! cursor, emits at most one token into the pending slot, and returns the
//! next state (`None` halts). [`Lexer::next_token`] is the trampoline: it
//! steps states until the slot is filled, then hands the token out. The
//! one-token slot is the whole handoff buffer, so the scanner never runs
//! more than one token ahead of its consumer.
//!
//! # Design
//!
//! Sub-scans shared by several contexts (quoted strings, identifiers)
//! return to the state recorded in [`Resume`]. Scanning never backtracks
//! over bytes already classified; the only pushback is the cursor's
//! single-rune `back_up`.

use std::iter::FusedIterator;

use serde::Serialize;
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords::{self, is_ident_char};
use crate::{LexErrorKind, LexerOptions, Token, TokenKind};

const LEFT_COMMENT: &str = "/*";
const RIGHT_COMMENT: &str = "*/";

/// Lexical context the scanner is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum State {
    /// Literal text; the initial state.
    Text,
    /// At a left delimiter.
    LeftDelim,
    /// At `/*` right after a left delimiter.
    Comment,
    /// Inside `{{ ... }}`.
    Action,
    /// At a recognized directive marker; the name is `name_len` bytes.
    Directive { kind: TokenKind, name_len: usize },
    /// At the `(` after a directive name.
    OpenDirective { extends: bool },
    /// Inside the body of `@import(`, `@params(` or `@include(`.
    InsideDirective,
    /// Right after `@extends(`: a quoted string must follow.
    ExtendsParam,
    /// After the `@extends` parameter: `)` must follow.
    CloseDirective,
    /// At the first character of an identifier.
    Identifier,
    /// Just past an opening `"`.
    Quote,
    /// Input exhausted, pending text flushed.
    Eof,
}

/// Where a nested identifier or string scan returns to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Resume {
    #[default]
    InsideDirective,
    CloseDirective,
    Action,
}

impl Resume {
    fn state(self) -> State {
        match self {
            Resume::InsideDirective => State::InsideDirective,
            Resume::CloseDirective => State::CloseDirective,
            Resume::Action => State::Action,
        }
    }
}

/// Template lexer over one source text.
///
/// Single use: once it has produced the end-of-stream or an error token,
/// every further pull returns `None`.
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    /// Source name, for diagnostics only.
    name: String,
    src: &'src str,
    options: LexerOptions,
    cursor: Cursor<'src>,
    /// Start of the pending token.
    start: usize,
    /// Next state to run; `None` once halted.
    state: Option<State>,
    resume: Resume,
    /// Nesting depth of `( )` inside the current action.
    paren_depth: u32,
    has_extends: bool,
    /// One-token handoff slot.
    pending: Option<Token<'src>>,
    /// Offset of the last token handed out.
    last_offset: usize,
    emitted: usize,
}

impl<'src> Lexer<'src> {
    /// Create a lexer with the default marker and delimiters.
    pub fn new(name: impl Into<String>, src: &'src str) -> Self {
        Self::with_options(name, src, LexerOptions::default())
    }

    /// Create a lexer with custom marker/delimiters. Empty overrides fall
    /// back to the defaults.
    pub fn with_options(name: impl Into<String>, src: &'src str, options: LexerOptions) -> Self {
        let name = name.into();
        let options = options.normalized();
        debug!(source = %name, len = src.len(), ?options, "lexer created");
        Self {
            name,
            src,
            options,
            cursor: Cursor::new(src),
            start: 0,
            state: Some(State::Text),
            resume: Resume::default(),
            paren_depth: 0,
            has_extends: false,
            pending: None,
            last_offset: 0,
            emitted: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &'src str {
        self.src
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// The state the next step will run, or `None` once halted.
    pub fn state(&self) -> Option<State> {
        self.state
    }

    /// 1-based line of the most recently returned token.
    pub fn line_number(&self) -> usize {
        1 + memchr::memchr_iter(b'\n', &self.src.as_bytes()[..self.last_offset]).count()
    }

    /// Run the state machine until one token is ready and return it.
    ///
    /// Returns `None` after the end-of-stream or error token.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        while self.pending.is_none() {
            let state = self.state?;
            self.state = self.step(state);
            if self.state.is_none() {
                debug!(source = %self.name, tokens = self.emitted, "lexer halted");
            }
        }
        let token = self.pending.take()?;
        self.last_offset = token.offset;
        Some(token)
    }

    fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Text => self.lex_text(),
            State::LeftDelim => self.lex_left_delim(),
            State::Comment => self.lex_comment(),
            State::Action => self.lex_action(),
            State::Directive { kind, name_len } => self.lex_directive(kind, name_len),
            State::OpenDirective { extends } => self.lex_open_directive(extends),
            State::InsideDirective => self.lex_inside_directive(),
            State::ExtendsParam => self.lex_extends_param(),
            State::CloseDirective => self.lex_close_directive(),
            State::Identifier => self.lex_identifier(),
            State::Quote => self.lex_quote(),
            State::Eof => self.lex_eof(),
        }
    }

    // ─── Emission ──────────────────────────────────────────────────

    /// Put `input[start..pos]` into the handoff slot and start a new token.
    fn emit(&mut self, kind: TokenKind) {
        debug_assert!(self.pending.is_none(), "handoff slot already full");
        let token = Token::new(kind, self.start, self.cursor.slice_from(self.start));
        trace!(?kind, offset = token.offset, text = token.text, "emit");
        self.pending = Some(token);
        self.start = self.cursor.pos();
        self.emitted += 1;
    }

    /// Drop the pending input.
    fn ignore(&mut self) {
        self.start = self.cursor.pos();
    }

    /// Emit an error token and halt.
    #[cold]
    fn error(&mut self, kind: LexErrorKind) -> Option<State> {
        debug!(source = %self.name, offset = self.start, error = %kind, "lex error");
        self.emit(TokenKind::Error(kind));
        None
    }

    fn flush_text(&mut self) {
        if self.cursor.pos() > self.start {
            self.emit(TokenKind::Text);
        }
    }

    // ─── Text ──────────────────────────────────────────────────────

    /// Scan literal text up to a left delimiter or a directive.
    fn lex_text(&mut self) -> Option<State> {
        let left_first = self.options.left_delim.as_bytes()[0];
        let marker_first = self.options.directive_marker.as_bytes()[0];
        while self.cursor.skip_to_either(left_first, marker_first) {
            if self.cursor.starts_with(&self.options.left_delim) {
                self.flush_text();
                return Some(State::LeftDelim);
            }
            if self.cursor.starts_with(&self.options.directive_marker) {
                if let Some((kind, name_len)) = self.match_directive() {
                    self.flush_text();
                    return Some(State::Directive { kind, name_len });
                }
                // Not a directive: the marker is plain text.
                self.cursor.advance_by(self.options.directive_marker.len());
            } else {
                self.cursor.bump();
            }
        }
        self.flush_text();
        Some(State::Eof)
    }

    /// Check for `marker name (` at the cursor without consuming anything.
    fn match_directive(&self) -> Option<(TokenKind, usize)> {
        let after = &self.cursor.rest()[self.options.directive_marker.len()..];
        let name_len: usize = after
            .chars()
            .take_while(|&c| is_ident_char(c))
            .map(char::len_utf8)
            .sum();
        let kind = keywords::directive(&after[..name_len])?;
        after[name_len..]
            .starts_with('(')
            .then_some((kind, name_len))
    }

    fn lex_eof(&mut self) -> Option<State> {
        self.emit(TokenKind::Eof);
        None
    }

    // ─── Actions & Comments ────────────────────────────────────────

    /// The left delimiter is known to be present.
    fn lex_left_delim(&mut self) -> Option<State> {
        self.cursor.advance_by(self.options.left_delim.len());
        self.emit(TokenKind::LeftDelim);
        if self.cursor.starts_with(LEFT_COMMENT) {
            return Some(State::Comment);
        }
        self.paren_depth = 0;
        Some(State::Action)
    }

    /// The comment-open marker is known to be present.
    fn lex_comment(&mut self) -> Option<State> {
        self.cursor.advance_by(LEFT_COMMENT.len());
        let Some(body_len) = self.cursor.find(RIGHT_COMMENT) else {
            return self.error(LexErrorKind::UnclosedComment);
        };
        self.cursor.advance_by(body_len + RIGHT_COMMENT.len());
        if !self.cursor.starts_with(&self.options.right_delim) {
            return self.error(LexErrorKind::CommentEndsBeforeDelimiter);
        }
        self.cursor.advance_by(self.options.right_delim.len());
        self.ignore();
        Some(State::Text)
    }

    /// Scan one token inside an action.
    fn lex_action(&mut self) -> Option<State> {
        if self.cursor.starts_with(&self.options.right_delim) {
            if self.paren_depth > 0 {
                return self.error(LexErrorKind::UnclosedLeftParen);
            }
            self.cursor.advance_by(self.options.right_delim.len());
            self.emit(TokenKind::RightDelim);
            return Some(State::Text);
        }
        let Some(c) = self.cursor.bump() else {
            return self.error(LexErrorKind::UnclosedAction);
        };
        let kind = match c {
            c if is_action_space(c) => {
                self.cursor.eat_while(is_action_space);
                TokenKind::Space
            }
            '"' => {
                self.resume = Resume::Action;
                return Some(State::Quote);
            }
            '(' => {
                self.paren_depth += 1;
                TokenKind::LeftParen
            }
            ')' => {
                if self.paren_depth == 0 {
                    return self.error(LexErrorKind::UnexpectedRightParen);
                }
                self.paren_depth -= 1;
                TokenKind::RightParen
            }
            '|' => TokenKind::Pipe,
            ':' if self.cursor.peek() == Some('=') => {
                self.cursor.bump();
                TokenKind::ColonEquals
            }
            '$' => {
                self.cursor.eat_while(is_ident_char);
                TokenKind::Variable
            }
            '.' if self.next_is_digit() => self.number(),
            '.' if self.cursor.peek().is_some_and(is_ident_char) => {
                self.cursor.eat_while(is_ident_char);
                TokenKind::Field
            }
            '.' => TokenKind::Dot,
            '0'..='9' => self.number(),
            '+' | '-' if self.next_is_digit() => self.number(),
            c if is_ident_char(c) => {
                self.cursor.back_up();
                self.resume = Resume::Action;
                return Some(State::Identifier);
            }
            c if c.is_ascii_punctuation() => TokenKind::Char,
            found => return self.error(LexErrorKind::UnrecognizedInAction { found }),
        };
        self.emit(kind);
        Some(State::Action)
    }

    fn next_is_digit(&self) -> bool {
        self.cursor.peek().is_some_and(|c| c.is_ascii_digit())
    }

    /// Absorb the rest of a number; the parser validates its form.
    fn number(&mut self) -> TokenKind {
        self.cursor
            .eat_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
        TokenKind::Number
    }

    // ─── Directives ────────────────────────────────────────────────

    /// Emit the directive name; `@extends` ordering is enforced here.
    fn lex_directive(&mut self, kind: TokenKind, name_len: usize) -> Option<State> {
        let extends = kind == TokenKind::Extends;
        if extends {
            if self.has_extends {
                return self.error(LexErrorKind::DuplicateExtends);
            }
            // Pending text was flushed, so `start` is the directive's offset.
            if self.start > 0 {
                return self.error(LexErrorKind::MisplacedExtends);
            }
            self.has_extends = true;
        }
        self.cursor
            .advance_by(self.options.directive_marker.len() + name_len);
        self.emit(kind);
        Some(State::OpenDirective { extends })
    }

    /// The `(` is known to be present.
    fn lex_open_directive(&mut self, extends: bool) -> Option<State> {
        self.cursor.advance_by(1);
        self.emit(TokenKind::OpenDirective);
        if extends {
            Some(State::ExtendsParam)
        } else {
            Some(State::InsideDirective)
        }
    }

    /// Scan one element of a directive body.
    fn lex_inside_directive(&mut self) -> Option<State> {
        match self.cursor.peek() {
            Some(' ' | '\t') => {
                self.cursor.eat_while(|c| c == ' ' || c == '\t');
                self.ignore();
                Some(State::InsideDirective)
            }
            Some('"') => {
                self.cursor.bump();
                self.resume = Resume::InsideDirective;
                Some(State::Quote)
            }
            Some(c) if is_ident_char(c) => {
                self.resume = Resume::InsideDirective;
                Some(State::Identifier)
            }
            Some('\r') => {
                self.cursor.bump();
                if self.cursor.peek() == Some('\n') {
                    self.cursor.bump();
                }
                self.emit(TokenKind::EndOfLine);
                Some(State::InsideDirective)
            }
            Some('\n') => {
                self.cursor.bump();
                self.emit(TokenKind::EndOfLine);
                Some(State::InsideDirective)
            }
            Some(')') => {
                self.cursor.bump();
                self.emit(TokenKind::CloseDirective);
                Some(State::Text)
            }
            None => self.error(LexErrorKind::UnclosedDirective),
            Some(found) => self.error(LexErrorKind::UnexpectedInDirective { found }),
        }
    }

    fn lex_extends_param(&mut self) -> Option<State> {
        match self.cursor.bump() {
            Some('"') => {
                self.resume = Resume::CloseDirective;
                Some(State::Quote)
            }
            found => {
                self.cursor.back_up();
                self.error(LexErrorKind::ExpectedQuote { found })
            }
        }
    }

    fn lex_close_directive(&mut self) -> Option<State> {
        match self.cursor.bump() {
            Some(')') => {
                self.emit(TokenKind::CloseDirective);
                Some(State::Text)
            }
            found => {
                self.cursor.back_up();
                self.error(LexErrorKind::ExpectedCloseDirective { found })
            }
        }
    }

    // ─── Identifiers & Strings ─────────────────────────────────────

    fn lex_identifier(&mut self) -> Option<State> {
        self.cursor.eat_while(is_ident_char);
        let word = self.cursor.slice_from(self.start);
        let kind = keywords::lookup(word).unwrap_or(TokenKind::Identifier);
        self.emit(kind);
        Some(self.resume.state())
    }

    /// Scan to the closing `"`. The opening quote is already consumed and
    /// belongs to the token.
    fn lex_quote(&mut self) -> Option<State> {
        loop {
            match self.cursor.skip_to_string_delim() {
                Some(b'"') => {
                    self.cursor.advance_by(1);
                    break;
                }
                Some(b'\\') => {
                    self.cursor.advance_by(1);
                    if matches!(self.cursor.bump(), None | Some('\n')) {
                        return self.error(LexErrorKind::UnterminatedString);
                    }
                }
                _ => return self.error(LexErrorKind::UnterminatedString),
            }
        }
        self.emit(TokenKind::String);
        Some(self.resume.state())
    }
}

fn is_action_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    #[inline]
    fn next(&mut self) -> Option<Token<'src>> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}
