use core::ptr::NonNull;

cfg_if::cfg_if! {
    if #[cfg(feature = "no-std")] {
        use alloc::boxed::Box;
    } else {
        use std::boxed::Box;
    }
}

/// an owning link to the next node. whoever holds the link owns the node
pub(super) type Link<T> = Option<NonNull<ForwardListNode<T>>>;

/// a node in the forward list, a container that hides internal details of
/// node layout
pub(super) struct ForwardListNode<T> {
    internal: InternalForwardListNode<T>,
}

impl<T> ForwardListNode<T> {
    /// constructs the value-less node that anchors a list
    pub(super) const fn new_sentinel() -> Self {
        Self {
            internal: InternalForwardListNode::Sentinel { next: None },
        }
    }

    /// constructs a new, unlinked node given the provided value
    pub(super) const fn new(t: T) -> Self {
        Self {
            internal: InternalForwardListNode::Data { data: t, next: None },
        }
    }

    /// move the node to the heap, handing ownership to the returned pointer
    pub(super) fn into_raw(self) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(self)))
    }

    /// take ownership of a node previously leaked with `into_raw`
    /// # Safety
    /// `ptr` must come from `into_raw`, must not have been freed already and
    /// must no longer be reachable from any other link
    pub(super) unsafe fn from_raw(ptr: NonNull<Self>) -> Self {
        *Box::from_raw(ptr.as_ptr())
    }

    /// returns true if the node is the sentinel node
    pub(super) fn is_sentinel(&self) -> bool {
        match &self.internal {
            InternalForwardListNode::Sentinel { .. } => true,
            InternalForwardListNode::Data { .. } => false,
        }
    }

    /// immutably borrow the value of the node
    pub(super) fn data(&self) -> &T {
        match &self.internal {
            InternalForwardListNode::Sentinel { .. } => {
                unreachable!("ForwardList implementation will never vend Sentinels")
            }
            InternalForwardListNode::Data { data, .. } => data,
        }
    }

    /// mutably borrow the value of the node
    pub(super) fn data_mut(&mut self) -> &mut T {
        match &mut self.internal {
            InternalForwardListNode::Sentinel { .. } => {
                unreachable!("ForwardList implementation will never vend Sentinels")
            }
            InternalForwardListNode::Data { data, .. } => data,
        }
    }

    /// consume the node, returning its value
    pub(super) fn into_data(self) -> T {
        match self.internal {
            InternalForwardListNode::Sentinel { .. } => {
                unreachable!("ForwardList implementation will never vend Sentinels")
            }
            InternalForwardListNode::Data { data, .. } => data,
        }
    }

    pub(super) fn next(&self) -> Link<T> {
        match &self.internal {
            InternalForwardListNode::Sentinel { next }
            | InternalForwardListNode::Data { next, .. } => *next,
        }
    }

    pub(super) fn next_mut(&mut self) -> &mut Link<T> {
        match &mut self.internal {
            InternalForwardListNode::Sentinel { next }
            | InternalForwardListNode::Data { next, .. } => next,
        }
    }

    pub(super) fn set_next(&mut self, new_next: Link<T>) {
        *self.next_mut() = new_next;
    }

    pub(super) fn take_next(&mut self) -> Link<T> {
        self.next_mut().take()
    }

    /// link the provided node directly after the current node
    /// # Safety
    /// `node` must be a valid, unlinked ForwardListNode<T> owned by the caller
    // Before: (self) -> (self.next)
    // After: (self) -> (node) -> (self.next)
    pub(super) unsafe fn insert_after(&mut self, node: NonNull<Self>) {
        debug_assert!(!(*node.as_ptr()).is_sentinel());
        (*node.as_ptr()).set_next(self.next());
        self.set_next(Some(node));
    }

    /// unlink the node directly after the current node, returning it. the
    /// caller becomes the owner of the returned node.
    /// # Safety
    /// the chain following `self` must consist of valid nodes
    // Before: (self) -> (next) -> (next.next)
    // After: (self) -> (next.next)
    pub(super) unsafe fn unlink_next(&mut self) -> Link<T> {
        let next = self.next()?;
        self.set_next((*next.as_ptr()).take_next());
        Some(next)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for ForwardListNode<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.internal {
            InternalForwardListNode::Sentinel { next } => f
                .debug_struct("Sentinel")
                .field("self", &core::ptr::addr_of!(*self))
                .field("next", next)
                .finish(),
            InternalForwardListNode::Data { data, next } => f
                .debug_struct("Node")
                .field("self", &core::ptr::addr_of!(*self))
                .field("data", data)
                .field("next", next)
                .finish(),
        }
    }
}

/// the private internal layout of a node, either a sentinel or user-provided data
enum InternalForwardListNode<T> {
    Sentinel { next: Link<T> },
    Data { data: T, next: Link<T> },
}

/// a run of data nodes detached from any list. dropping it releases every
/// node front to back in a loop, so arbitrarily long chains never recurse.
pub(super) struct Chain<T> {
    head: Link<T>,
}

impl<T> Chain<T> {
    /// # Safety
    /// `head` must own a chain of data nodes that no list can reach anymore
    pub(super) unsafe fn from_head(head: Link<T>) -> Self {
        Self { head }
    }

    fn pop(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: the chain is the sole owner of every node it links
        let node = unsafe { ForwardListNode::from_raw(head) };
        self.head = node.next();
        Some(node.into_data())
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        // if a value's destructor panics, finish releasing the rest of the
        // chain while unwinding
        struct DropGuard<'a, T>(&'a mut Chain<T>);

        impl<'a, T> Drop for DropGuard<'a, T> {
            fn drop(&mut self) {
                while self.0.pop().is_some() {}
            }
        }

        while let Some(data) = self.pop() {
            let guard = DropGuard(self);
            drop(data);
            core::mem::forget(guard);
        }
    }
}
