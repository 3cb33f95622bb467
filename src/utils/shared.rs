use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};

/// Single-threaded shared handle: an `Rc<RefCell<T>>` without the typing.
///
/// Window state is shared between the [`Runner`](crate::runner::Runner), the
/// [`Window`](crate::window::Window) handle and the pixel buffer bound to it.
/// Everything lives on the event-loop thread, so no locking is involved.
pub struct SharedRef<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> SharedRef<T> {
    pub fn new(value: T) -> SharedRef<T> {
        SharedRef {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Borrow immutably. Panics if a mutable borrow is alive.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Borrow mutably. Panics if any other borrow is alive.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    /// Borrow mutably, or `None` if the value is already borrowed.
    pub fn try_borrow_mut(&self) -> Option<RefMut<'_, T>> {
        self.inner.try_borrow_mut().ok()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for SharedRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_borrow() {
            Ok(value) => f.debug_tuple("SharedRef").field(&*value).finish(),
            Err(_) => f.write_str("SharedRef(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_value() {
        let a = SharedRef::new(vec![1]);
        let b = a.clone();

        b.borrow_mut().push(2);

        assert_eq!(*a.borrow(), vec![1, 2]);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn try_borrow_mut_fails_while_borrowed() {
        let a = SharedRef::new(0u32);
        let _guard = a.borrow();

        assert!(a.try_borrow_mut().is_none());
    }
}
