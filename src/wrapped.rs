/**
 * Generic holder that keeps the closure's concrete type.
 * Accepts move-only captured state, but every closure shape yields a
 * different `Wrapped<F>`, so two of them can't share a `Vec`.
 *
 * ```compile_fail
 * use callbox::wrap;
 *
 * let all = vec![wrap(|| println!("A")), wrap(|| println!("B"))];
 * ```
 */
#[derive(Debug)]
pub struct Wrapped<F> {
    f: F,
}

impl<F: FnMut()> Wrapped<F> {
    pub fn new(f: F) -> Self {
        Wrapped { f }
    }

    pub fn call(&mut self) {
        (self.f)()
    }

    pub fn into_inner(self) -> F {
        self.f
    }
}

pub fn wrap<F: FnMut()>(f: F) -> Wrapped<F> {
    Wrapped::new(f)
}
