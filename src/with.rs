use crate::logger::Logger;
use std::io::Write;

/// Calls methods on an object for their side effects, and keeps chaining.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct With<T> {
    pub object: T,
}

impl<T> With<T> {
    pub fn new(object: T) -> Self {
        Self { object }
    }

    /// Wrap whatever a constructor returns.
    pub fn build<F>(constructor: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::new(constructor())
    }

    pub fn into_inner(self) -> T {
        self.object
    }

    /// Call `f` on the object and throw away what it returns.
    pub fn with<R, F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.object);
        self
    }

    /// Like [`With::with`], but stops at the first error.
    pub fn try_with<R, E, F>(mut self, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        f(&mut self.object)?;
        Ok(self)
    }

    /// Log the object, under a label, to the logger's step channel.
    pub fn trace<OUT, ERR>(self, log: &mut Logger<OUT, ERR>, label: &str) -> std::io::Result<Self>
    where
        T: std::fmt::Debug,
        OUT: Write,
        ERR: Write,
    {
        log.trace(label, &self.object)?;
        Ok(self)
    }
}

impl<T> From<T> for With<T> {
    fn from(object: T) -> Self {
        Self::new(object)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for With<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.object, f)
    }
}
