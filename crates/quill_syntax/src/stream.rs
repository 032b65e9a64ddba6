//! Token stream connecting the scanner to its consumer.
//!
//! The scanner writes into a [`TokenSink`]. Two sinks exist:
//! - `Vec<Token>` for draining a whole source up front (see [`crate::lexer::lex`]);
//! - a rendezvous `sync_channel(0)` sender, so the scanner runs on its own thread and blocks on every token until the
//!   consumer takes it. At most one token is ever in flight.
//!
//! ## Notes
//! - The handoff is cancellable: when the consumer drops its end, the scanner's next `send` fails and the scanner
//!   halts instead of blocking forever.
//! - There is no fan-out; one stream feeds exactly one consumer.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use thiserror::Error;

use crate::lexer::{ScanConfig, Scanner, Token};

/// The consumer of a token stream has gone away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("token consumer disconnected")]
pub struct Disconnected;

/// Destination for scanned tokens.
pub trait TokenSink {
    /// Hand one token to the consumer.
    ///
    /// ## Errors
    /// Returns [`Disconnected`] when nobody will ever read the token; the scanner stops on it.
    fn send(&mut self, token: Token) -> Result<(), Disconnected>;
}

impl TokenSink for Vec<Token> {
    fn send(&mut self, token: Token) -> Result<(), Disconnected> {
        self.push(token);
        Ok(())
    }
}

impl TokenSink for SyncSender<Token> {
    fn send(&mut self, token: Token) -> Result<(), Disconnected> {
        SyncSender::send(self, token).map_err(|_| Disconnected)
    }
}

/// Receiving end handed to a scoped consumer.
pub type Tokens = mpsc::IntoIter<Token>;

/// Tokens scanned on a background thread.
///
/// Iterating blocks until the scanner produces the next token and ends when the scanner halts. Dropping the stream
/// cancels the scanner and joins its thread.
pub struct TokenStream {
    receiver: Option<Receiver<Token>>,
    handle: Option<JoinHandle<()>>,
}

impl TokenStream {
    /// Start scanning `source` on a dedicated thread.
    ///
    /// ## Errors
    /// Returns the OS error if the thread cannot be spawned.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn spawn(source: String, config: ScanConfig) -> std::io::Result<Self> {
        let (sender, receiver) = mpsc::sync_channel(0);
        let handle = thread::Builder::new()
            .name("quill-scanner".to_string())
            .spawn(move || {
                Scanner::with_config(&source, sender, config).run();
            })?;
        Ok(Self {
            receiver: Some(receiver),
            handle: Some(handle),
        })
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.receiver.as_ref()?.recv().ok()
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        // Hang up first so a scanner blocked in `send` wakes up and exits.
        self.receiver.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Scan `source` on a scoped thread while `consume` reads the tokens on the current one.
///
/// The scanner borrows `source` for the duration of the call. When `consume` returns, its receiver is dropped, which
/// stops the scanner if it still had tokens to hand over; the scanner thread is joined before this returns.
pub fn scoped<R>(source: &str, config: ScanConfig, consume: impl FnOnce(Tokens) -> R) -> R {
    let (sender, receiver) = mpsc::sync_channel(0);
    thread::scope(|scope| {
        scope.spawn(move || {
            Scanner::with_config(source, sender, config).run();
        });
        consume(receiver.into_iter())
    })
}
