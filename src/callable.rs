//! Type-erased callable box.

use std::fmt::Debug;

/**
 * Single invocation entry point every boxed callable is reached through.
 */
trait Invoke {
    fn invoke(&mut self);
}

/**
 * Implementation record, one instantiation per captured-callable type.
 */
struct CallableImpl<F> {
    f: F,
}

impl<F: FnMut()> Invoke for CallableImpl<F> {
    fn invoke(&mut self) {
        (self.f)()
    }
}

/**
 * Owns any zero-argument callable behind one concrete type.
 * The captured state is moved in once and never copied, so closures owning
 * a non-clonable resource are accepted.
 *
 * ```
 * use callbox::{Callable, Exclusive};
 *
 * let owned = Exclusive::new(4);
 * let mut boxes = vec![
 *     Callable::wrap(|| println!("A")),
 *     Callable::wrap(move || println!("H={}", *owned)),
 * ];
 * for callable in boxes.iter_mut() {
 *     callable.call();
 * }
 * ```
 *
 * The source closure is consumed by `wrap`:
 *
 * ```compile_fail
 * use callbox::Callable;
 *
 * let name = String::from("G");
 * let f = move || println!("{name}");
 * let _callable = Callable::wrap(f);
 * f();
 * ```
 */
pub struct Callable {
    inner: Box<dyn Invoke>,
}

impl Callable {
    pub fn wrap<F>(f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        tracing::trace!(callable = std::any::type_name::<F>(), "wrapping callable");
        Callable {
            inner: Box::new(CallableImpl { f }),
        }
    }

    /**
     * Runs the stored callable once on the calling thread.
     */
    pub fn call(&mut self) {
        self.inner.invoke()
    }
}

impl<F: FnMut() + 'static> From<F> for Callable {
    fn from(f: F) -> Self {
        Callable::wrap(f)
    }
}

impl Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callable").finish_non_exhaustive()
    }
}
