use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::node::{ForwardListNode, Link};
use super::ForwardList;

/// an immutable front-to-back iterator over a ForwardList
pub struct Iter<'a, T> {
    curr: Link<T>,
    remaining: usize,
    _ll: PhantomData<&'a ForwardListNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(curr: Link<T>, remaining: usize) -> Self {
        Self {
            curr,
            remaining,
            _ll: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        // SAFETY: links handed to an Iter always point at live data nodes of
        // a list that is borrowed for 'a
        let node = unsafe { &*curr.as_ptr() };
        self.curr = node.next();
        self.remaining -= 1;
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self::new(self.curr, self.remaining)
    }
}

impl<'a, T: core::fmt::Debug> core::fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Iter")?;
        f.debug_list().entries(self.clone()).finish()
    }
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T> {}

/// a mutable front-to-back iterator over a ForwardList
pub struct IterMut<'a, T> {
    curr: Link<T>,
    remaining: usize,
    _ll: PhantomData<&'a mut ForwardListNode<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(curr: Link<T>, remaining: usize) -> Self {
        Self {
            curr,
            remaining,
            _ll: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        // SAFETY: links handed to an IterMut always point at live data nodes
        // of a list that is exclusively borrowed for 'a, and each node is
        // yielded once
        let node = unsafe { &mut *curr.as_ptr() };
        self.curr = node.next();
        self.remaining -= 1;
        Some(node.data_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T: core::fmt::Debug> core::fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // a shared view of the elements not yet handed out
        let remaining: Iter<'_, T> = Iter::new(self.curr, self.remaining);
        f.write_str("IterMut")?;
        f.debug_list().entries(remaining).finish()
    }
}

unsafe impl<'a, T: Send> Send for IterMut<'a, T> {}
unsafe impl<'a, T: Sync> Sync for IterMut<'a, T> {}

/// giving up write access is always allowed. there is deliberately no way
/// back from an Iter to an IterMut
impl<'a, T> From<IterMut<'a, T>> for Iter<'a, T> {
    fn from(iter: IterMut<'a, T>) -> Self {
        Self::new(iter.curr, iter.remaining)
    }
}

/// an owning iterator over the elements of a ForwardList
pub struct IntoIter<T> {
    ll: ForwardList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.ll.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ll.len(), Some(self.ll.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.ll).finish()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { ll: self }
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
