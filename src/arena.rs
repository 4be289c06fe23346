use alloc::vec::Vec;
use core::mem;

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_live() -> ! {
    panic!("Attempted to access data of vacant slot");
}

/// Sibling links of one slot. For the sentinel these are the list anchors:
/// `next` is the logical head and `prev` the logical tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) prev: Ptr,
    pub(crate) next: Ptr,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K, T> {
    pub(crate) hash: u64,
    pub(crate) key: K,
    pub(crate) value: T,
}

impl<K, T> Node<K, T> {
    pub(crate) fn key_value_mut(&mut self) -> (&K, &mut T) {
        (&self.key, &mut self.value)
    }
}

#[derive(Debug, Clone)]
enum SlotState<K, T> {
    Vacant,
    Live(Node<K, T>),
}

/// One arena slot. A vacant slot re-uses `links.next` as its free-list link,
/// with the sentinel handle marking the end of the free list.
#[derive(Debug, Clone)]
pub(crate) struct Slot<K, T> {
    pub(crate) links: Links,
    state: SlotState<K, T>,
}

impl<K, T> Slot<K, T> {
    pub(crate) fn node(&self) -> &Node<K, T> {
        match &self.state {
            SlotState::Live(node) => node,
            SlotState::Vacant => assert_live(),
        }
    }

    pub(crate) fn node_mut(&mut self) -> &mut Node<K, T> {
        match &mut self.state {
            SlotState::Live(node) => node,
            SlotState::Vacant => assert_live(),
        }
    }
}

/// Slot store owning every node of the map plus the sentinel.
///
/// Slot 0 is the sentinel: allocated at construction, never freed, never on
/// the free list. Its links make the insertion-order list circular, so
/// append and unlink need no head/tail branches.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, T> {
    slots: Vec<Slot<K, T>>,
    free_head: Option<Ptr>,
}

fn sentinel_slot<K, T>() -> Slot<K, T> {
    Slot {
        links: Links {
            prev: Ptr::SENTINEL,
            next: Ptr::SENTINEL,
        },
        state: SlotState::Vacant,
    }
}

impl<K, T> Arena<K, T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.saturating_add(1));
        slots.push(sentinel_slot());
        Arena {
            slots,
            free_head: None,
        }
    }

    pub(crate) fn links(&self, ptr: Ptr) -> Links {
        self.slots[ptr.unchecked_get()].links
    }

    pub(crate) fn links_mut(&mut self, ptr: Ptr) -> &mut Links {
        &mut self.slots[ptr.unchecked_get()].links
    }

    pub(crate) fn node(&self, ptr: Ptr) -> &Node<K, T> {
        self.slots[ptr.unchecked_get()].node()
    }

    pub(crate) fn node_mut(&mut self, ptr: Ptr) -> &mut Node<K, T> {
        self.slots[ptr.unchecked_get()].node_mut()
    }

    /// Whether `ptr` currently refers to a live entry. Handles issued before
    /// a `clear` land outside the truncated slot vector and answer `false`
    /// here, as do freed slots and the sentinel.
    pub(crate) fn is_live(&self, ptr: Ptr) -> bool {
        matches!(
            self.slots.get(ptr.unchecked_get()),
            Some(Slot {
                state: SlotState::Live(_),
                ..
            })
        )
    }

    /// Resets to the empty state: only the self-linked sentinel remains.
    pub(crate) fn clear(&mut self) {
        self.slots.truncate(1);
        self.slots[0].links = Links {
            prev: Ptr::SENTINEL,
            next: Ptr::SENTINEL,
        };
        self.free_head = None;
    }

    /// Appends a new node at the tail of the list, immediately before the
    /// sentinel, and returns its handle.
    pub(crate) fn push_back(&mut self, hash: u64, key: K, value: T) -> Ptr {
        let tail = self.slots[0].links.prev;
        let ptr = self.insert_slot(Slot {
            links: Links {
                prev: tail,
                next: Ptr::SENTINEL,
            },
            state: SlotState::Live(Node { hash, key, value }),
        });
        self.links_mut(tail).next = ptr;
        self.slots[0].links.prev = ptr;
        ptr
    }

    fn insert_slot(&mut self, slot: Slot<K, T>) -> Ptr {
        if let Some(ptr) = self.free_head {
            let old = mem::replace(&mut self.slots[ptr.unchecked_get()], slot);
            let next_free = old.links.next;
            self.free_head = if next_free == Ptr::SENTINEL {
                None
            } else {
                Some(next_free)
            };
            ptr
        } else {
            let ptr = Ptr::unchecked_from(self.slots.len());
            self.slots.push(slot);
            ptr
        }
    }

    /// Unlinks `ptr` from its neighbors. The circular sentinel keeps this
    /// branch-free for head, tail, and sole-entry cases alike.
    pub(crate) fn unlink(&mut self, ptr: Ptr) {
        let Links { prev, next } = self.links(ptr);
        self.links_mut(prev).next = next;
        self.links_mut(next).prev = prev;
    }

    /// Unlinks `ptr` and returns its node, pushing the slot onto the free
    /// list for reuse.
    pub(crate) fn free_and_unlink(&mut self, ptr: Ptr) -> Node<K, T> {
        self.unlink(ptr);
        let old = mem::replace(
            &mut self.slots[ptr.unchecked_get()],
            Slot {
                links: Links {
                    prev: Ptr::SENTINEL,
                    next: self.free_head.unwrap_or(Ptr::SENTINEL),
                },
                state: SlotState::Vacant,
            },
        );
        self.free_head = Some(ptr);
        match old.state {
            SlotState::Live(node) => node,
            SlotState::Vacant => assert_live(),
        }
    }

    pub(crate) fn base_ptr(&mut self) -> *mut Slot<K, T> {
        self.slots.as_mut_ptr()
    }
}
