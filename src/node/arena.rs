use std::mem;
use std::num::NonZeroU32;

use crate::Error;

/// A stable reference to a slot in an `Arena`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Handle(NonZeroU32);

impl Handle {
    pub const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        let raw = (index + 1) as u32;
        match NonZeroU32::new(raw) {
            Some(raw) => Handle(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub fn index(self) -> usize { (self.0.get() - 1) as usize }
}

#[derive(Clone)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self { Arena::new() }
}

impl<T> Arena<T> {
    pub const fn new() -> Self {
        Arena { slots: Vec::new(), free: Vec::new() }
    }

    /// The number of live elements the arena could ever hold, bounded by both the handle width
    /// and the address space.
    pub fn max_len() -> usize {
        let slot = mem::size_of::<Option<T>>().max(1);
        Handle::MAX.min(isize::MAX as usize / slot)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize { self.slots.len() - self.free.len() }

    /// The number of `alloc` calls that can succeed without reallocating.
    #[cfg(test)]
    pub fn spare(&self) -> usize { self.slots.capacity() - self.slots.len() + self.free.len() }

    /// Ensures that the next `additional` calls to `alloc` neither reallocate nor exceed the
    /// handle space.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), Error> {
        let fresh = additional.saturating_sub(self.free.len());
        let max = Self::max_len();

        if self.slots.len().saturating_add(fresh) > max {
            return Err(Error::CapacityExceeded { max });
        }

        self.slots.try_reserve(fresh)?;
        Ok(())
    }

    pub fn alloc(&mut self, element: T) -> Handle {
        match self.free.pop() {
            Some(handle) => {
                self.slots[handle.index()] = Some(element);
                handle
            }
            None => {
                self.slots.push(Some(element));
                Handle::from_index(self.slots.len() - 1)
            }
        }
    }

    #[inline]
    pub fn get(&self, handle: Handle) -> &T {
        self.try_get(handle).expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Returns the element behind a handle that did not necessarily come from this arena.
    #[inline]
    pub fn try_get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    pub fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Mutable references to every live element, indexed by `Handle::index`.
    pub fn slots_mut(&mut self) -> impl Iterator<Item = Option<&mut T>> + '_ {
        self.slots.iter_mut().map(Option::as_mut)
    }
}
