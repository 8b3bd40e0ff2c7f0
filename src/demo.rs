//! Fixed demonstration sequence printing markers `A` through `H`.

use std::{
    cell::RefCell,
    fmt::Display,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    callable::Callable,
    cloneable::CloneableCallable,
    error::{Error, Result},
    exclusive::Exclusive,
    wrapped::wrap,
};

#[derive(Debug)]
struct ConsoleState<W> {
    out: W,
    error: Option<io::Error>,
}

/**
 * Shared handle to an output writer. Callables capture a clone and print
 * through it. The first write error is kept and reported by `finish`.
 */
#[derive(Debug)]
pub struct Console<W> {
    state: Rc<RefCell<ConsoleState<W>>>,
}

impl<W> Clone for Console<W> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Console {
            state: Rc::new(RefCell::new(ConsoleState { out, error: None })),
        }
    }

    /**
     * Writes one line. Does nothing once a write has failed.
     */
    pub fn println(&self, line: impl Display) {
        let mut state = self.state.borrow_mut();
        if state.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(state.out, "{}", line) {
            state.error = Some(err);
        }
    }

    /**
     * Flushes and hands the writer back.
     * Fails if a callable still holds a clone of this console.
     */
    pub fn finish(self) -> Result<W> {
        let state = Rc::try_unwrap(self.state)
            .map_err(|_| Error::Static("Console still shared"))?
            .into_inner();
        if let Some(err) = state.error {
            return Err(err.into());
        }
        let mut out = state.out;
        out.flush()?;
        Ok(out)
    }
}

/**
 * Runs the whole sequence against `out` and returns the writer.
 */
pub fn run<W: Write + 'static>(out: W) -> Result<W> {
    let console = Console::new(out);
    copyable_without_captures(&console);
    copyable_with_shared_value(&console, 1, ("C", "D"));
    copyable_with_shared_value(&console, 2, ("E", "F"));
    generic_with_exclusive_value(&console, 3);
    erased_with_exclusive_value(&console, 4);
    console.finish()
}

fn copyable_without_captures<W: Write + 'static>(console: &Console<W>) {
    tracing::debug!("clonable callables without captures");
    let (c1, c2) = (console.clone(), console.clone());
    let t1 = CloneableCallable::new(move || c1.println("A"));
    let t2 = CloneableCallable::new(move || c2.println("B"));
    t1.call();
    t2.call();
}

fn copyable_with_shared_value<W: Write + 'static>(
    console: &Console<W>,
    value: i32,
    (first, second): (&'static str, &'static str),
) {
    tracing::debug!(value, "clonable callables sharing a value");
    let shared = Rc::new(value);
    let (c1, c2) = (console.clone(), console.clone());
    let s = Rc::clone(&shared);
    let t1 = CloneableCallable::new(move || c1.println(format!("{}={}", first, s)));
    let s = Rc::clone(&shared);
    let t2 = CloneableCallable::new(move || c2.println(format!("{}={}", second, s)));
    t1.call();
    t2.call();
}

fn generic_with_exclusive_value<W: Write + 'static>(console: &Console<W>, value: i32) {
    tracing::debug!(value, "generic wrapper owning an exclusive value");
    let c = console.clone();
    let w = Exclusive::new(value);
    let f = move || c.println(format!("G={}", *w));
    f();

    let mut t3 = wrap(f);
    t3.call();
}

fn erased_with_exclusive_value<W: Write + 'static>(console: &Console<W>, value: i32) {
    tracing::debug!(value, "erased callable owning an exclusive value");
    let c = console.clone();
    let w2 = Exclusive::new(value);
    let mut t4 = Callable::wrap(move || c.println(format!("H={}", *w2)));
    t4.call();
}
