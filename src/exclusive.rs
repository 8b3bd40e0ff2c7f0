use std::ops::Deref;

/**
 * Heap value with exactly one owner. Deliberately neither `Clone` nor `Copy`.
 */
#[derive(Debug, PartialEq, Eq)]
pub struct Exclusive<T>(Box<T>);

impl<T> Exclusive<T> {
    pub fn new(value: T) -> Self {
        Exclusive(Box::new(value))
    }

    pub fn into_inner(self) -> T {
        *self.0
    }
}

impl<T> Deref for Exclusive<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}
