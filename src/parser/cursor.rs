/*!
The lowest layer of the recognizer: a cursor over the input and a scoped
transaction that makes multi-step matching atomic.

Every grammar production in this crate is written against these two types.
A production opens a [`Transaction`], consumes whatever it needs through the
cursor and either calls [`Transaction::commit`] or simply returns. Returning
without committing drops the transaction, which rewinds the cursor to where
the production started. This is the only backtracking mechanism in the
crate, and it composes: nested transactions each rewind to their own
checkpoint.
*/

use crate::record::Span;

/// A positional view over the input being recognized.
///
/// No operation on a cursor ever advances past the end of the input, and no
/// operation panics when a match fails. Failure is always reported via a
/// `false` (or `None`) return value, with the position left unchanged.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'i> {
    input: &'i [u8],
    pos: usize,
}

impl<'i> Cursor<'i> {
    /// Create a new cursor positioned at the start of the given input.
    pub(crate) fn new(input: &'i [u8]) -> Cursor<'i> {
        Cursor { input, pos: 0 }
    }

    /// Returns the current byte offset into the input.
    ///
    /// This is always in the range `0..=input.len()`.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true when every byte of the input has been consumed.
    pub(crate) fn is_eof(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Returns the unconsumed remainder of the input.
    pub(crate) fn remaining(&self) -> &'i [u8] {
        &self.input[self.pos..]
    }

    /// Returns the bytes of the input covered by the given span.
    ///
    /// The slice returned borrows the input, not the cursor.
    pub(crate) fn slice(&self, span: Span) -> &'i [u8] {
        &self.input[span.range()]
    }

    /// Tests the next byte against the given predicate without consuming it.
    ///
    /// At the end of input this always returns false.
    pub(crate) fn peek(&self, predicate: impl FnOnce(u8) -> bool) -> bool {
        self.remaining().first().map_or(false, |&byte| predicate(byte))
    }

    /// Returns true if the remaining input starts with the given literal.
    pub(crate) fn peek_literal(&self, literal: &[u8]) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Unconditionally consumes one byte and returns it.
    ///
    /// Callers are expected to have checked the byte with `peek` first. At
    /// the end of input, this returns `None` and does nothing.
    pub(crate) fn consume(&mut self) -> Option<u8> {
        let &byte = self.remaining().first()?;
        self.pos += 1;
        Some(byte)
    }

    /// Consumes one byte if and only if it satisfies the predicate.
    pub(crate) fn consume_if(
        &mut self,
        predicate: impl FnOnce(u8) -> bool,
    ) -> bool {
        if !self.peek(predicate) {
            return false;
        }
        self.consume().is_some()
    }

    /// Consumes the given byte if it is next in the input.
    pub(crate) fn consume_byte(&mut self, byte: u8) -> bool {
        self.consume_if(|b| b == byte)
    }

    /// Consumes the given literal if the remaining input starts with it.
    ///
    /// This is all-or-nothing. When only a prefix of the literal matches,
    /// nothing is consumed.
    pub(crate) fn consume_literal(&mut self, literal: &[u8]) -> bool {
        if !self.peek_literal(literal) {
            return false;
        }
        self.pos += literal.len();
        true
    }

    /// Consumes the first of the given literals that matches, trying them in
    /// order.
    pub(crate) fn consume_any_literal(&mut self, literals: &[&[u8]]) -> bool {
        literals.iter().any(|literal| self.consume_literal(literal))
    }
}

/// A type whose position can be saved and restored.
///
/// This is the seam that [`Transaction`] is written against. Both the raw
/// [`Cursor`] and the grammar state that wraps it implement it.
pub(crate) trait Checkpoint {
    /// Returns the current position.
    fn offset(&self) -> usize;

    /// Moves back to a position previously returned by `offset`.
    fn rewind(&mut self, offset: usize);
}

impl<'i> Checkpoint for Cursor<'i> {
    fn offset(&self) -> usize {
        self.pos
    }

    fn rewind(&mut self, offset: usize) {
        debug_assert!(offset <= self.pos, "can only rewind backwards");
        self.pos = offset;
    }
}

/// A scoped checkpoint used to make a sequence of matching steps atomic.
///
/// A transaction mutably borrows the state it guards for its entire
/// lifetime, and dereferences to it. So productions are called through the
/// transaction itself, e.g., `tx.parse_hour()`.
///
/// When a transaction is dropped without [`Transaction::commit`] having been
/// called, the guarded state is rewound to the position it had when the
/// transaction was created. Early returns (including `?`) therefore undo
/// everything consumed since the checkpoint.
#[derive(Debug)]
pub(crate) struct Transaction<'a, S: Checkpoint> {
    state: &'a mut S,
    start: usize,
    committed: bool,
}

impl<'a, S: Checkpoint> Transaction<'a, S> {
    /// Open a new transaction at the current position of `state`.
    pub(crate) fn new(state: &'a mut S) -> Transaction<'a, S> {
        let start = state.offset();
        Transaction { state, start, committed: false }
    }

    /// Returns the span of input consumed since this transaction was opened.
    pub(crate) fn matched(&self) -> Span {
        Span::new(self.start, self.state.offset())
    }

    /// Make everything consumed since this transaction was opened permanent.
    ///
    /// The span of input that was consumed is returned, for productions that
    /// capture the exact text they matched.
    pub(crate) fn commit(mut self) -> Span {
        self.committed = true;
        self.matched()
    }
}

impl<'a, S: Checkpoint> Drop for Transaction<'a, S> {
    fn drop(&mut self) {
        if !self.committed {
            self.state.rewind(self.start);
        }
    }
}

impl<'a, S: Checkpoint> core::ops::Deref for Transaction<'a, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.state
    }
}

impl<'a, S: Checkpoint> core::ops::DerefMut for Transaction<'a, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.state
    }
}
