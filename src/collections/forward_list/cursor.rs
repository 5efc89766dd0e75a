//! positions within a ForwardList.
//!
//! a cursor sits on one of three kinds of position: the before-begin
//! position (the sentinel), an element, or the end position past the last
//! element. only element positions can be dereferenced. positions are
//! compared by identity: two cursors are equal when they sit on the same
//! node, and every end position equals every other end position.
//!
//! | operation        | before-begin   | element | last element | end   |
//! |------------------|----------------|---------|--------------|-------|
//! | `current`        | None           | value   | value        | None  |
//! | `move_next`      | ok             | ok      | ok, to end   | panic |
//! | `insert_after`   | ok             | ok      | ok           | panic |
//! | `erase_after`    | ok if nonempty | ok      | panic        | panic |
//! | `remove_after`   | value or None  | value   | None         | None  |

use super::error::{ForwardListError, ForwardListResult};
use super::node::Link;
use super::ForwardList;

/// a read-only position in a ForwardList
pub struct Cursor<'a, T> {
    ll: &'a ForwardList<T>,
    curr: Link<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(ll: &'a ForwardList<T>, curr: Link<T>) -> Self {
        Self { ll, curr }
    }

    /// get the element at the cursor, or None at the before-begin and end
    /// positions
    pub fn current(&self) -> Option<&'a T> {
        // SAFETY: a cursor only ever holds nodes of the list it borrows
        let curr = unsafe { &*self.curr?.as_ptr() };
        if curr.is_sentinel() {
            None
        } else {
            Some(curr.data())
        }
    }

    /// get the element after the cursor, or None if there is none
    pub fn peek_next(&self) -> Option<&'a T> {
        // SAFETY: see `current`
        unsafe {
            let next = (*self.curr?.as_ptr()).next()?;
            Some((*next.as_ptr()).data())
        }
    }

    /// returns true if the cursor is on the sentinel
    pub fn is_before_begin(&self) -> bool {
        self.curr == Some(self.ll.sentinel)
    }

    /// returns true if the cursor is past the last element
    pub fn is_end(&self) -> bool {
        self.curr.is_none()
    }

    /// move the cursor forward one position, failing at the end position
    pub fn try_move_next(&mut self) -> ForwardListResult<()> {
        let curr = self.curr.ok_or(ForwardListError::PastTheEnd)?;
        // SAFETY: see `current`
        self.curr = unsafe { curr.as_ref() }.next();
        Ok(())
    }

    /// move the cursor forward one position
    ///
    /// # Panics
    /// panics if the cursor is at the end position
    pub fn move_next(&mut self) {
        if let Err(err) = self.try_move_next() {
            panic!("cannot advance cursor: {}", err);
        }
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T: core::fmt::Debug> core::fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut dbg = f.debug_struct("Cursor");
        if self.is_before_begin() {
            dbg.field("position", &"before-begin");
        } else if self.is_end() {
            dbg.field("position", &"end");
        } else {
            dbg.field("current", &self.current());
        }
        dbg.finish()
    }
}

// SAFETY: a Cursor is a shared borrow of the list
unsafe impl<'a, T: Sync> Send for Cursor<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Cursor<'a, T> {}

/// a position in a ForwardList that can edit the list around it
pub struct CursorMut<'a, T> {
    ll: &'a mut ForwardList<T>,
    curr: Link<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(ll: &'a mut ForwardList<T>, curr: Link<T>) -> Self {
        Self { ll, curr }
    }

    /// get the element at the cursor, or None at the before-begin and end
    /// positions
    pub fn current(&mut self) -> Option<&mut T> {
        // SAFETY: a cursor only ever holds nodes of the list it exclusively
        // borrows
        let curr = unsafe { &mut *self.curr?.as_ptr() };
        if curr.is_sentinel() {
            None
        } else {
            Some(curr.data_mut())
        }
    }

    /// get the element after the cursor, or None if there is none
    pub fn peek_next(&mut self) -> Option<&mut T> {
        // SAFETY: see `current`
        unsafe {
            let next = (*self.curr?.as_ptr()).next()?;
            Some((*next.as_ptr()).data_mut())
        }
    }

    /// returns true if the cursor is on the sentinel
    pub fn is_before_begin(&self) -> bool {
        self.curr == Some(self.ll.sentinel)
    }

    /// returns true if the cursor is past the last element
    pub fn is_end(&self) -> bool {
        self.curr.is_none()
    }

    /// move the cursor forward one position, failing at the end position
    pub fn try_move_next(&mut self) -> ForwardListResult<()> {
        let curr = self.curr.ok_or(ForwardListError::PastTheEnd)?;
        // SAFETY: see `current`
        self.curr = unsafe { curr.as_ref() }.next();
        Ok(())
    }

    /// move the cursor forward one position
    ///
    /// # Panics
    /// panics if the cursor is at the end position
    pub fn move_next(&mut self) {
        if let Err(err) = self.try_move_next() {
            panic!("cannot advance cursor: {}", err);
        }
    }

    /// view this position read-only, for as long as the returned cursor lives
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.ll, self.curr)
    }

    /// insert `value` directly after the cursor, increasing the size of the
    /// list by 1. the cursor does not move; the returned cursor sits on the
    /// new element. the node is fully built before any link changes.
    ///
    /// # Panics
    /// panics if the cursor is at the end position
    pub fn insert_after(&mut self, value: T) -> CursorMut<'_, T> {
        let pos = match self.curr {
            Some(pos) => pos,
            None => panic!("cannot insert after cursor: {}", ForwardListError::PastTheEnd),
        };
        // SAFETY: `pos` is the sentinel or a data node of `self.ll`
        let node = unsafe { self.ll.insert_after_node(pos, value) };
        CursorMut::new(&mut *self.ll, Some(node))
    }

    /// unlink the element after the cursor and return it, or None if there
    /// is nothing after the cursor. the cursor does not move.
    pub fn remove_after(&mut self) -> Option<T> {
        let pos = self.curr?;
        // SAFETY: `pos` is the sentinel or a data node of `self.ll`
        unsafe { self.ll.remove_after_node(pos) }
    }

    /// drop the element after the cursor, returning a cursor at the element
    /// that now follows this one, or at the end position
    pub fn try_erase_after(&mut self) -> ForwardListResult<CursorMut<'_, T>> {
        let pos = self.curr.ok_or(ForwardListError::PastTheEnd)?;
        // SAFETY: `pos` is the sentinel or a data node of `self.ll`
        let removed = unsafe { self.ll.remove_after_node(pos) };
        drop(removed.ok_or(ForwardListError::NoSuccessor)?);
        // SAFETY: `pos` is still linked into `self.ll`
        let next = unsafe { pos.as_ref() }.next();
        Ok(CursorMut::new(&mut *self.ll, next))
    }

    /// drop the element after the cursor, decreasing the size of the list
    /// by 1. returns a cursor at the element that now follows this one, or at
    /// the end position
    ///
    /// # Panics
    /// panics if the cursor is at the end position or on the last element
    pub fn erase_after(&mut self) -> CursorMut<'_, T> {
        match self.try_erase_after() {
            Ok(next) => next,
            Err(err) => panic!("cannot erase after cursor: {}", err),
        }
    }
}

/// a mutable position can always be downgraded. there is deliberately no
/// conversion the other way
impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor::new(cursor.ll, cursor.curr)
    }
}

impl<'a, T: core::fmt::Debug> core::fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CursorMut").field(&self.as_cursor()).finish()
    }
}

// SAFETY: a CursorMut is an exclusive borrow of the list
unsafe impl<'a, T: Send> Send for CursorMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for CursorMut<'a, T> {}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.curr == other.curr
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.curr == other.curr
    }
}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.curr == other.curr
    }
}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.curr == other.curr
    }
}

impl<'a, T> Eq for CursorMut<'a, T> {}
