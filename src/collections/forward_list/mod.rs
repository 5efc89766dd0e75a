//! an owning, singly-linked list with a before-begin sentinel.
//!
//! elements are reached front to back only. every insertion and removal is
//! expressed relative to the node *before* the affected position, which is why
//! the list keeps a value-less sentinel node in front of its first element:
//! inserting at the front is just inserting after the sentinel.
//!
//! positions are [`Cursor`]s (read-only) and [`CursorMut`]s (mutable). they
//! borrow the list, so a position can never dangle or refer to a different
//! list. the list does no internal locking; sharing one between threads for
//! mutation needs an external lock such as a `Mutex`.

use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ptr::NonNull;

cfg_if::cfg_if! {
    if #[cfg(feature = "no-std")] {
        use alloc::boxed::Box;
    } else {
        use std::boxed::Box;
    }
}

mod cmp;
mod cursor;
mod error;
mod iter;
mod node;

pub use cursor::{Cursor, CursorMut};
pub use error::{ForwardListError, ForwardListResult};
pub use iter::{IntoIter, Iter, IterMut};

use node::{Chain, ForwardListNode, Link};

/// a heap-allocated, singly-linked list that owns its elements
pub struct ForwardList<T> {
    /// a sentinel node that always exists, even in empty lists. it lives on
    /// the heap so its address survives moves of the list
    sentinel: NonNull<ForwardListNode<T>>,
    /// the number of non-sentinel elements in the list
    len: usize,
    marker: PhantomData<Box<ForwardListNode<T>>>,
}

impl<T> ForwardList<T> {
    /// create a new, empty ForwardList
    pub fn new() -> Self {
        Self {
            sentinel: ForwardListNode::new_sentinel().into_raw(),
            len: 0,
            marker: PhantomData,
        }
    }

    /// get the length of the list, not including the sentinel node
    pub fn len(&self) -> usize {
        self.len
    }

    /// returns true if the length of the list is 0
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// get the first element of the list, or None if the list is empty
    pub fn front(&self) -> Option<&T> {
        // SAFETY: every link reachable from the sentinel is a live data node
        // owned by this list
        self.head().map(|n| unsafe { (*n.as_ptr()).data() })
    }

    /// mutably borrow the first element of the list, or None if the list is
    /// empty
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: see `front`, and `&mut self` makes the borrow exclusive
        self.head().map(|n| unsafe { (*n.as_ptr()).data_mut() })
    }

    /// push a value to the front of this list in O(1)
    pub fn push_front(&mut self, value: T) {
        // SAFETY: the sentinel always belongs to this list
        unsafe { self.insert_after_node(self.sentinel, value) };
    }

    /// pop the value at the front of this list in O(1). if the list is empty,
    /// None is returned
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: the sentinel always belongs to this list
        unsafe { self.remove_after_node(self.sentinel) }
    }

    /// remove every element, releasing the nodes one at a time. calling this
    /// on an empty list does nothing
    pub fn clear(&mut self) {
        drop(self.detach_chain());
    }

    /// exchange the contents of two lists in O(1). only the links hanging off
    /// the sentinels and the lengths move, the nodes themselves stay put
    pub fn swap(&mut self, other: &mut Self) {
        // SAFETY: two distinct lists never share a sentinel, so the two
        // mutable borrows cannot alias
        unsafe {
            core::mem::swap(
                (*self.sentinel.as_ptr()).next_mut(),
                (*other.sentinel.as_ptr()).next_mut(),
            );
        }
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// return an immutable iterator for this list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head(), self.len)
    }

    /// return a mutable iterator for this list
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head(), self.len)
    }

    /// return a read-only cursor at the before-begin position
    pub fn cursor_before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Some(self.sentinel))
    }

    /// return a read-only cursor at the first element, or at the end position
    /// if the list is empty
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head())
    }

    /// return a read-only cursor at the end position
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// return a cursor at the before-begin position that can edit the list
    pub fn cursor_before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let sentinel = self.sentinel;
        CursorMut::new(self, Some(sentinel))
    }

    /// return a cursor at the first element that can edit the list, or at
    /// the end position if the list is empty
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head();
        CursorMut::new(self, head)
    }

    fn head(&self) -> Link<T> {
        // SAFETY: the sentinel is allocated in `new` and freed only on drop
        unsafe { self.sentinel.as_ref() }.next()
    }

    fn last_node(&self) -> NonNull<ForwardListNode<T>> {
        let mut curr = self.sentinel;
        // SAFETY: every link reachable from the sentinel is a live node
        while let Some(next) = unsafe { curr.as_ref() }.next() {
            curr = next;
        }
        curr
    }

    /// allocate a node for `value` and link it after `pos`, returning it.
    /// the node exists before any link is touched, so a failed allocation
    /// leaves the chain as it was
    /// # Safety
    /// `pos` must be the sentinel or a data node of this list
    unsafe fn insert_after_node(
        &mut self,
        pos: NonNull<ForwardListNode<T>>,
        value: T,
    ) -> NonNull<ForwardListNode<T>> {
        let node = ForwardListNode::new(value).into_raw();
        (*pos.as_ptr()).insert_after(node);
        self.len += 1;
        node
    }

    /// unlink the node after `pos` and return its value, or None if `pos` is
    /// the last node
    /// # Safety
    /// `pos` must be the sentinel or a data node of this list
    unsafe fn remove_after_node(&mut self, pos: NonNull<ForwardListNode<T>>) -> Option<T> {
        let node = (*pos.as_ptr()).unlink_next()?;
        self.len -= 1;
        Some(ForwardListNode::from_raw(node).into_data())
    }

    /// hand every data node over to a detached chain, leaving the list empty
    fn detach_chain(&mut self) -> Chain<T> {
        // SAFETY: the sentinel belongs to this list, and once its link is
        // taken no list can reach the chain anymore
        unsafe {
            let head = (*self.sentinel.as_ptr()).take_next();
            self.len = 0;
            Chain::from_head(head)
        }
    }
}

// SAFETY: the list owns its nodes exclusively, like a Box<T> would
unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        let chain = self.detach_chain();
        // SAFETY: the sentinel came from `into_raw` in `new` and nothing
        // links to it
        drop(unsafe { ForwardListNode::from_raw(self.sentinel) });
        drop(chain);
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// copy-assign with the strong guarantee: the copy is built off to the
    /// side and only swapped in once every element cloned successfully
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = list.sentinel;
        for value in iter {
            // SAFETY: `tail` is always the sentinel or the last node of `list`
            tail = unsafe { list.insert_after_node(tail, value) };
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// appends at the back. finding the back costs one walk over the list
impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.last_node();
        for value in iter {
            // SAFETY: `tail` is always the sentinel or the last node of `self`
            tail = unsafe { self.insert_after_node(tail, value) };
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elt in self.iter() {
            elt.hash(state);
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::rc::Rc;

    use super::*;

    fn collect<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn forward_lists_are_sendable() {
        fn send<S: Send>(_: S) {}
        send(ForwardList::<u32>::new());
    }

    #[test]
    fn new_list_is_empty() {
        let ll = ForwardList::<u32>::new();
        assert_eq!(ll.len(), 0);
        assert!(ll.is_empty());
        assert!(ll.front().is_none());
        assert!(ll.iter().next().is_none());
    }

    #[test]
    fn can_push_front() {
        let mut ll = ForwardList::new();
        assert_eq!(ll.len(), 0);
        ll.push_front(73);
        assert_eq!(ll.len(), 1);
        assert!(!ll.is_empty());
    }

    #[test]
    fn front_after_push_front_returns_some() {
        let mut ll = ForwardList::new();
        ll.push_front(73);
        assert_eq!(ll.front(), Some(&73));
        ll.push_front(42);
        assert_eq!(ll.front(), Some(&42));
        assert_eq!(ll.len(), 2);
    }

    #[test]
    fn front_mut_edits_first_element() {
        let mut ll = ForwardList::from([1, 2]);
        *ll.front_mut().expect("list is not empty") += 10;
        assert_eq!(collect(&ll), [11, 2]);
    }

    #[test]
    fn pop_front_on_empty_list_returns_none() {
        let mut ll = ForwardList::<u32>::new();
        assert_eq!(ll.pop_front(), None);
        assert_eq!(ll.len(), 0);
    }

    #[test]
    fn can_push_front_push_front_pop_front_pop_front() {
        let mut ll = ForwardList::new();
        ll.push_front(73);
        ll.push_front(42);

        assert_eq!(ll.pop_front(), Some(42));
        assert_eq!(ll.len(), 1);
        assert_eq!(ll.front(), Some(&73));

        assert_eq!(ll.pop_front(), Some(73));
        assert_eq!(ll.len(), 0);
        assert_eq!(ll.pop_front(), None);
    }

    #[test]
    fn from_iter_preserves_order() {
        let ll: ForwardList<u32> = [73, 42, 114, 901].into_iter().collect();
        assert_eq!(ll.len(), 4);
        assert_eq!(collect(&ll), [73, 42, 114, 901]);
    }

    #[test]
    fn from_empty_iter_is_empty() {
        let ll: ForwardList<u32> = core::iter::empty().collect();
        assert!(ll.is_empty());
        assert_eq!(ll, ForwardList::new());
    }

    #[test]
    fn extend_appends_at_the_back() {
        let mut ll = ForwardList::from([1, 2]);
        ll.extend([3, 4]);
        ll.extend(&[5]);
        assert_eq!(ll.len(), 5);
        assert_eq!(collect(&ll), [1, 2, 3, 4, 5]);

        let mut empty = ForwardList::new();
        empty.extend([9]);
        assert_eq!(collect(&empty), [9]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut ll = ForwardList::from([1, 2, 3]);
        ll.clear();
        assert_eq!(ll.len(), 0);
        assert!(ll.iter().next().is_none());

        // clearing twice is the same as clearing once
        ll.clear();
        assert_eq!(ll.len(), 0);
        assert!(ll.iter().next().is_none());

        // the list is still usable afterwards
        ll.push_front(4);
        assert_eq!(collect(&ll), [4]);
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let mut a = ForwardList::from([1, 2, 3]);
        let b = a.clone();

        a.push_front(0);
        *a.front_mut().unwrap() = 100;
        a.pop_front();
        a.pop_front();

        assert_eq!(collect(&a), [2, 3]);
        assert_eq!(collect(&b), [1, 2, 3]);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = ForwardList::from([7, 8, 9]);
        let mut target = ForwardList::from([1]);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.len(), 3);

        target.push_front(6);
        assert_eq!(collect(&source), [7, 8, 9]);
    }

    #[derive(Debug)]
    struct Counted {
        id: u32,
        live: Rc<Cell<isize>>,
        panic_on_clone: bool,
        panic_on_drop: bool,
    }

    impl Counted {
        fn new(id: u32, live: &Rc<Cell<isize>>) -> Self {
            live.set(live.get() + 1);
            Self {
                id,
                live: live.clone(),
                panic_on_clone: false,
                panic_on_drop: false,
            }
        }
    }

    impl Clone for Counted {
        fn clone(&self) -> Self {
            if self.panic_on_clone {
                panic!("refusing to clone {}", self.id);
            }
            Self::new(self.id, &self.live)
        }
    }

    impl Drop for Counted {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
            if self.panic_on_drop {
                panic!("refusing to drop {}", self.id);
            }
        }
    }

    #[test]
    fn panicking_clone_releases_partial_copy() {
        let live = Rc::new(Cell::new(0));
        let mut source: ForwardList<Counted> = (0..6).map(|i| Counted::new(i, &live)).collect();
        source.iter_mut().nth(4).unwrap().panic_on_clone = true;
        assert_eq!(live.get(), 6);

        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| source.clone()));
        assert!(res.is_err());

        // the four clones made before the failure were all released
        assert_eq!(live.get(), 6);
        assert_eq!(source.len(), 6);
        let ids: Vec<u32> = source.iter().map(|c| c.id).collect();
        assert_eq!(ids, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn panicking_clone_from_leaves_target_untouched() {
        let live = Rc::new(Cell::new(0));
        let mut source: ForwardList<Counted> = (0..3).map(|i| Counted::new(i, &live)).collect();
        source.iter_mut().last().unwrap().panic_on_clone = true;
        let mut target: ForwardList<Counted> = (10..12).map(|i| Counted::new(i, &live)).collect();

        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            target.clone_from(&source)
        }));
        assert!(res.is_err());

        let ids: Vec<u32> = target.iter().map(|c| c.id).collect();
        assert_eq!(ids, [10, 11]);
        assert_eq!(live.get(), 5);
    }

    #[test]
    fn clear_releases_everything_even_if_a_destructor_panics() {
        let live = Rc::new(Cell::new(0));
        let mut ll: ForwardList<Counted> = (0..5).map(|i| Counted::new(i, &live)).collect();
        ll.iter_mut().nth(1).unwrap().panic_on_drop = true;

        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| ll.clear()));
        assert!(res.is_err());
        assert_eq!(live.get(), 0);
        assert!(ll.is_empty());
        assert!(ll.iter().next().is_none());
    }

    #[test]
    fn drop_releases_every_element() {
        let live = Rc::new(Cell::new(0));
        let ll: ForwardList<Counted> = (0..10).map(|i| Counted::new(i, &live)).collect();
        assert_eq!(live.get(), 10);
        drop(ll);
        assert_eq!(live.get(), 0);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn dropping_a_long_list_does_not_recurse() {
        let mut ll = ForwardList::new();
        for i in 0..1_000_000u32 {
            ll.push_front(i);
        }
        assert_eq!(ll.len(), 1_000_000);
        drop(ll);
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = ForwardList::from([1, 2, 3]);
        let mut b = ForwardList::from([4, 5]);
        a.swap(&mut b);
        assert_eq!(collect(&a), [4, 5]);
        assert_eq!(a.len(), 2);
        assert_eq!(collect(&b), [1, 2, 3]);
        assert_eq!(b.len(), 3);

        // both lists keep working with their new chains
        a.push_front(0);
        b.pop_front();
        assert_eq!(collect(&a), [0, 4, 5]);
        assert_eq!(collect(&b), [2, 3]);
    }

    #[test]
    fn swap_with_empty_list() {
        let mut a = ForwardList::from([1, 2, 3]);
        let mut b = ForwardList::new();
        a.swap(&mut b);
        assert!(a.is_empty());
        assert!(a.iter().next().is_none());
        assert_eq!(collect(&b), [1, 2, 3]);
    }

    #[test]
    fn mem_swap_also_exchanges_contents() {
        let mut a = ForwardList::from([1]);
        let mut b = ForwardList::from([2, 3]);
        core::mem::swap(&mut a, &mut b);
        assert_eq!(collect(&a), [2, 3]);
        assert_eq!(collect(&b), [1]);
    }

    #[test]
    fn debug_prints_like_a_slice() {
        let ll = ForwardList::from([1, 2, 3]);
        assert_eq!(format!("{:?}", ll), "[1, 2, 3]");
        assert_eq!(format!("{:?}", ForwardList::<u8>::new()), "[]");
    }

    #[test]
    fn equal_lists_hash_the_same() {
        fn hash_of<T: Hash>(t: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            t.hash(&mut hasher);
            hasher.finish()
        }

        let a = ForwardList::from([1, 2, 3]);
        let b: ForwardList<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn smoke_test() {
        let mut ll = ForwardList::from([1, 2, 3]);

        ll.push_front(0);
        assert_eq!(collect(&ll), [0, 1, 2, 3]);
        assert_eq!(ll.len(), 4);

        ll.cursor_front_mut().insert_after(99);
        assert_eq!(collect(&ll), [0, 99, 1, 2, 3]);
        assert_eq!(ll.len(), 5);

        ll.cursor_before_begin_mut().erase_after();
        assert_eq!(collect(&ll), [99, 1, 2, 3]);
        assert_eq!(ll.len(), 4);

        ll.pop_front();
        assert_eq!(collect(&ll), [1, 2, 3]);
        assert_eq!(ll.len(), 3);
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest::test_runner::Config;
    use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

    use super::*;

    proptest_state_machine::prop_state_machine! {
        #![proptest_config(Config {
            // no regression files for generated transition sequences
            failure_persistence: None,
            .. Config::default()
        })]

        #[test]
        fn forward_list_state_machine_test(
            sequential
            1..200
            =>
            ForwardList<u32>
        );
    }

    /// The possible transitions of the state machine. Positions count the
    /// before-begin position as 0, so position `i` sits in front of the
    /// element at index `i`.
    #[derive(Clone, Debug)]
    pub enum Transition {
        PushFront(u32),
        PopFront,
        InsertAfter(usize, u32),
        EraseAfter(usize),
        Swap(Vec<u32>),
        CloneFrom(Vec<u32>),
        Clear,
    }

    pub struct ForwardListStateMachine;

    impl ReferenceStateMachine for ForwardListStateMachine {
        type State = Vec<u32>;
        type Transition = Transition;

        fn init_state() -> BoxedStrategy<Self::State> {
            Just(Vec::new()).boxed()
        }

        fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
            let len = state.len();
            prop_oneof![
                1 => Just(Transition::PopFront),
                3 => any::<u32>().prop_map(Transition::PushFront),
                3 => (0..=len, any::<u32>()).prop_map(|(pos, v)| Transition::InsertAfter(pos, v)),
                2 => (0..=len).prop_map(Transition::EraseAfter),
                1 => vec(any::<u32>(), 0..8).prop_map(Transition::Swap),
                1 => vec(any::<u32>(), 0..8).prop_map(Transition::CloneFrom),
                1 => Just(Transition::Clear),
            ]
            .boxed()
        }

        fn preconditions(state: &Self::State, transition: &Self::Transition) -> bool {
            match transition {
                Transition::InsertAfter(pos, _) => *pos <= state.len(),
                Transition::EraseAfter(pos) => *pos < state.len(),
                _ => true,
            }
        }

        fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
            match transition {
                Transition::PushFront(value) => state.insert(0, *value),
                Transition::PopFront => {
                    if !state.is_empty() {
                        state.remove(0);
                    }
                }
                Transition::InsertAfter(pos, value) => state.insert(*pos, *value),
                Transition::EraseAfter(pos) => {
                    state.remove(*pos);
                }
                Transition::Swap(values) | Transition::CloneFrom(values) => {
                    state = values.clone();
                }
                Transition::Clear => state.clear(),
            }
            state
        }
    }

    impl StateMachineTest for ForwardList<u32> {
        type SystemUnderTest = Self;
        type Reference = ForwardListStateMachine;

        fn init_test(
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) -> Self::SystemUnderTest {
            Self::new()
        }

        fn apply(
            mut state: Self::SystemUnderTest,
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
            transition: Transition,
        ) -> Self::SystemUnderTest {
            match transition {
                Transition::PushFront(value) => {
                    let len = state.len();
                    state.push_front(value);
                    assert_eq!(state.front(), Some(&value));
                    assert_eq!(state.len(), len + 1);
                }
                Transition::PopFront => {
                    state.pop_front();
                }
                Transition::InsertAfter(pos, value) => {
                    let mut cursor = state.cursor_before_begin_mut();
                    for _ in 0..pos {
                        cursor.move_next();
                    }
                    let mut inserted = cursor.insert_after(value);
                    assert_eq!(inserted.current().copied(), Some(value));
                }
                Transition::EraseAfter(pos) => {
                    let mut cursor = state.cursor_before_begin_mut();
                    for _ in 0..pos {
                        cursor.move_next();
                    }
                    cursor.erase_after();
                }
                Transition::Swap(values) => {
                    let mut other: ForwardList<u32> = values.into_iter().collect();
                    state.swap(&mut other);
                }
                Transition::CloneFrom(values) => {
                    let other: ForwardList<u32> = values.into_iter().collect();
                    state.clone_from(&other);
                    assert_eq!(state, other);
                }
                Transition::Clear => state.clear(),
            }
            state
        }

        fn check_invariants(
            state: &Self::SystemUnderTest,
            ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) {
            assert_eq!(state.len(), ref_state.len());
            assert_eq!(state.is_empty(), ref_state.is_empty());
            assert_eq!(state.iter().count(), state.len());
            assert!(state.iter().eq(ref_state.iter()));
        }
    }

    proptest! {
        #[test]
        fn collecting_then_iterating_yields_the_same_sequence(values in vec(any::<i64>(), 0..64)) {
            let ll: ForwardList<i64> = values.iter().copied().collect();
            prop_assert_eq!(ll.len(), values.len());
            prop_assert!(ll.iter().eq(values.iter()));
            prop_assert!(ll.into_iter().eq(values.into_iter()));
        }

        #[test]
        fn clone_survives_mutation_of_the_original(values in vec(any::<u8>(), 0..32), pushed in any::<u8>()) {
            let mut a: ForwardList<u8> = values.iter().copied().collect();
            let b = a.clone();
            a.push_front(pushed);
            a.iter_mut().for_each(|v| *v = v.wrapping_add(1));
            prop_assert!(b.iter().eq(values.iter()));
            prop_assert_eq!(b.len(), values.len());
        }
    }
}

#[cfg(all(not(feature = "no-std"), all(test, feature = "loom")))]
mod loom_tests {
    use loom::sync::{Arc, Mutex};
    use loom::thread;

    use super::*;

    #[test]
    fn mutex_guarded_list_sees_every_push() {
        loom::model(|| {
            let ll = Arc::new(Mutex::new(ForwardList::new()));

            let handles: Vec<_> = (0..2u32)
                .map(|i| {
                    let ll = ll.clone();
                    thread::spawn(move || {
                        ll.lock().unwrap().push_front(i);
                    })
                })
                .collect();

            for h in handles {
                h.join().unwrap();
            }

            let ll = ll.lock().unwrap();
            assert_eq!(ll.len(), 2);
            let mut seen: Vec<u32> = ll.iter().copied().collect();
            seen.sort();
            assert_eq!(seen, [0, 1]);
        });
    }

    #[test]
    fn list_moved_to_another_thread_stays_intact() {
        loom::model(|| {
            let ll = ForwardList::from([1u32, 2, 3]);
            let handle = thread::spawn(move || {
                let mut ll = ll;
                ll.pop_front();
                ll
            });
            let ll = handle.join().unwrap();
            assert!(ll.iter().eq([2, 3].iter()));
        });
    }
}
