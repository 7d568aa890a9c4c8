//! Threaded token handoff.
//!
//! [`scan`] runs a [`Lexer`] on its own scoped thread and passes tokens to
//! the consumer through a zero-capacity `crossbeam` channel. Every send is a
//! rendezvous: the scanner blocks until the consumer takes the token, so it
//! is never more than one token ahead and never buffers.
//!
//! The scanner stops at the end-of-stream or error token, or as soon as the
//! consumer drops its [`TokenReceiver`]: the pending send then fails instead
//! of blocking forever.

use std::iter::FusedIterator;
use std::thread;

use crossbeam::channel::{self, Receiver};
use tracing::{debug, debug_span};

use crate::{Lexer, Token};

/// Consumer side of the handoff.
#[derive(Debug)]
pub struct TokenReceiver<'src> {
    rx: Receiver<Token<'src>>,
}

impl<'src> TokenReceiver<'src> {
    /// Block until the scanner hands over the next token.
    ///
    /// Returns `None` once the scanner has halted.
    pub fn recv(&mut self) -> Option<Token<'src>> {
        self.rx.recv().ok()
    }
}

impl<'src> Iterator for TokenReceiver<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.recv()
    }
}

impl FusedIterator for TokenReceiver<'_> {}

/// Scan `lexer` on a separate thread while `consume` pulls its tokens.
///
/// Returns whatever `consume` returns, after the scanner thread has
/// finished. Tokens borrow from the source, so they may be returned out of
/// `consume`.
///
/// ```
/// use strongo_lexer::{handoff, Lexer, TokenKind};
///
/// let lexer = Lexer::new("inline", "Hi {{ .Name }}");
/// let kinds: Vec<TokenKind> = handoff::scan(lexer, |tokens| tokens.map(|t| t.kind).collect());
/// assert_eq!(kinds.last(), Some(&TokenKind::Eof));
/// ```
pub fn scan<'src, R>(lexer: Lexer<'src>, consume: impl FnOnce(&mut TokenReceiver<'src>) -> R) -> R {
    let (tx, rx) = channel::bounded(0);
    thread::scope(|scope| {
        scope.spawn(move || {
            let mut lexer = lexer;
            let span = debug_span!("scanner", source = %lexer.name());
            let _guard = span.enter();
            while let Some(token) = lexer.next_token() {
                if tx.send(token).is_err() {
                    debug!("consumer dropped the receiver");
                    break;
                }
            }
        });
        let mut receiver = TokenReceiver { rx };
        consume(&mut receiver)
    })
}
