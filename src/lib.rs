//! Callables boxed behind one concrete type, including closures that own
//! resources which can't be cloned.

pub mod error;
pub mod callable;
pub mod cloneable;
pub mod demo;
mod exclusive;
mod wrapped;

pub use crate::error::{Error, Result};
pub use crate::callable::Callable;
pub use crate::cloneable::{CloneableCall, CloneableCallable};
pub use crate::exclusive::Exclusive;
pub use crate::wrapped::{wrap, Wrapped};
