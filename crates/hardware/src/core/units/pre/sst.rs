//! Stalling Slice Table (SST).
//!
//! The SST remembers which instruction addresses belong to recent stalling
//! slices, the dependence chains that led to a full-window stall. It is a
//! fixed-capacity set with Least Recently Used eviction: both insertion and
//! lookup move an address to the Most Recently Used position, so addresses
//! that keep stalling the pipeline stay resident.
//!
//! # Layout
//!
//! The recency order is a doubly-linked list threaded through a fixed arena of
//! `capacity` slots, paired with a hash index from address to slot. Every slot
//! carries an explicit `occupied` bit, so address 0 is a valid key and never
//! aliases an unused slot. Unoccupied slots always trail the occupied ones, so
//! the list tail is the next slot to claim (or the LRU victim once full).
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `insert_or_touch()`: O(1) amortized (hash lookup + splice)
//!   - `contains()`: O(1) amortized
//! - **Space Complexity:** O(C) where C is the configured capacity
//! - **Allocation:** Arena and index are sized at construction

use std::collections::HashMap;

use tracing::trace;

use crate::common::ConfigError;
use crate::core::pipeline::DynInst;

/// A slot in the recency arena.
#[derive(Clone, Copy, Debug)]
struct SstSlot {
    /// Instruction address held by this slot (meaningless when unoccupied).
    addr: u64,
    /// Whether this slot currently tracks an address.
    occupied: bool,
    /// Neighbour towards the MRU end.
    prev: Option<usize>,
    /// Neighbour towards the LRU end.
    next: Option<usize>,
}

/// Stalling Slice Table structure.
#[derive(Debug, Clone)]
pub struct StallingSliceTable {
    /// Recency arena; always exactly `capacity` slots.
    slots: Vec<SstSlot>,
    /// Address to slot lookup for occupied slots.
    index: HashMap<u64, usize>,
    /// Slot at the MRU position.
    head: usize,
    /// Slot at the LRU position.
    tail: usize,
}

impl StallingSliceTable {
    /// Creates a new Stalling Slice Table that can track `capacity` addresses.
    ///
    /// All slots start unoccupied and are linked in arena order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSstEntries`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroSstEntries);
        }

        let slots = (0..capacity)
            .map(|i| SstSlot {
                addr: 0,
                occupied: false,
                prev: i.checked_sub(1),
                next: (i + 1 < capacity).then_some(i + 1),
            })
            .collect();

        Ok(Self {
            slots,
            index: HashMap::with_capacity(capacity),
            head: 0,
            tail: capacity - 1,
        })
    }

    /// Returns the maximum number of addresses the table can track.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of addresses currently tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no address is tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` if the next new address will evict the LRU entry.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Adds an address to the table, or refreshes it if already present.
    ///
    /// A tracked address is moved to the MRU position without changing
    /// occupancy. A new address claims the LRU slot and becomes MRU; if the
    /// table was full, the address previously held there is evicted.
    ///
    /// # Arguments
    ///
    /// * `addr` - The instruction address to insert.
    ///
    /// # Returns
    ///
    /// The evicted address, if the insertion displaced one.
    pub fn insert_or_touch(&mut self, addr: u64) -> Option<u64> {
        if let Some(&slot) = self.index.get(&addr) {
            self.move_to_front(slot);
            return None;
        }

        let victim = self.tail;
        let evicted = if self.is_full() {
            let old = self.slots[victim].addr;
            let _ = self.index.remove(&old);
            trace!("sst: evict {old:#x} for {addr:#x}");
            Some(old)
        } else {
            debug_assert!(!self.slots[victim].occupied);
            None
        };

        let entry = &mut self.slots[victim];
        entry.addr = addr;
        entry.occupied = true;
        self.move_to_front(victim);
        let _ = self.index.insert(addr, victim);
        evicted
    }

    /// Checks whether an address is tracked, refreshing it on a hit.
    ///
    /// Lookups reinforce recency just like insertions do.
    ///
    /// # Arguments
    ///
    /// * `addr` - The instruction address to look up.
    ///
    /// # Returns
    ///
    /// `true` if the address is currently tracked.
    pub fn contains(&mut self, addr: u64) -> bool {
        match self.index.get(&addr) {
            Some(&slot) => {
                self.move_to_front(slot);
                true
            }
            None => false,
        }
    }

    /// Adds an instruction of a stalling slice, keyed by its PC.
    ///
    /// See [`Self::insert_or_touch`].
    #[inline]
    pub fn add_inst<I: DynInst + ?Sized>(&mut self, inst: &I) -> Option<u64> {
        self.insert_or_touch(inst.pc())
    }

    /// Checks whether an instruction belongs to a tracked stalling slice.
    ///
    /// See [`Self::contains`].
    #[inline]
    pub fn has_inst<I: DynInst + ?Sized>(&mut self, inst: &I) -> bool {
        self.contains(inst.pc())
    }

    /// Iterates over tracked addresses from MRU to LRU without refreshing them.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        let mut cursor = Some(self.head);
        std::iter::from_fn(move || {
            let slot = &self.slots[cursor?];
            if !slot.occupied {
                return None;
            }
            cursor = slot.next;
            Some(slot.addr)
        })
    }

    /// Splices `slot` out of the list and relinks it at the MRU position.
    fn move_to_front(&mut self, slot: usize) {
        // Only the head has no predecessor.
        let Some(prev) = self.slots[slot].prev else {
            return;
        };
        let next = self.slots[slot].next;

        self.slots[prev].next = next;
        match next {
            Some(n) => self.slots[n].prev = Some(prev),
            None => self.tail = prev,
        }

        let old_head = self.head;
        self.slots[old_head].prev = Some(slot);
        let entry = &mut self.slots[slot];
        entry.prev = None;
        entry.next = Some(old_head);
        self.head = slot;
    }
}
