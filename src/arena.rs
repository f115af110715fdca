use std::ops::{Index, IndexMut};

/// A stable index into an [`Arena`].  Stays valid across insertions and
/// removals of other values; once its own value is removed the slot may be
/// handed out again by a later insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(usize);

impl Handle {
    /// Gets the zero-based slot number of this handle.
    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Handle(index)
    }
}

/// A slot store that assigns stable handles to inserted values.  Freed slots
/// are reused, most recently freed first, so the slot bound only grows when
/// every slot is occupied.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Gets the number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gets an exclusive upper bound on the index of every live handle.
    pub fn slot_bound(&self) -> usize {
        self.slots.len()
    }

    /// Inserts a value, returning its handle.
    pub fn insert(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                debug_assert!(self.slots[index].is_none());
                self.slots[index] = Some(value);
                Handle(index)
            }
            None => {
                self.slots.push(Some(value));
                Handle(self.slots.len() - 1)
            }
        }
    }

    /// Removes the value named by `handle`, returning it if it was live.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let value = self.slots.get_mut(handle.0)?.take()?;
        self.len -= 1;
        self.free.push(handle.0);
        Some(value)
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.0)?.as_ref()
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots.get_mut(handle.0)?.as_mut()
    }

    /// Iterates over live values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (Handle(index), value)))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().flatten()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &T {
        self.get(handle).expect("stale arena handle")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut T {
        self.get_mut(handle).expect("stale arena handle")
    }
}
