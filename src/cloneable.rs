use std::fmt::Debug;
use dyn_clone::DynClone;

/**
 * Callable that can be duplicated together with its captured state.
 */
pub trait CloneableCall: DynClone {
    fn call(&self);
}

impl<F: Fn() + Clone> CloneableCall for F {
    fn call(&self) {
        self()
    }
}

/**
 * Clonable callable holder.
 * Important: captured state must be clonable, so closures owning an
 * `Exclusive` resource are rejected.
 *
 * ```compile_fail
 * use callbox::{CloneableCallable, Exclusive};
 *
 * let w = Exclusive::new(3);
 * let t1 = CloneableCallable::new(move || println!("G={}", *w));
 * t1.call();
 * ```
 */
pub struct CloneableCallable {
    func: Box<dyn CloneableCall>,
}

impl Clone for CloneableCallable {
    fn clone(&self) -> Self {
        Self { func: dyn_clone::clone_box(&*self.func) }
    }
}

impl Debug for CloneableCallable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloneableCallable").finish_non_exhaustive()
    }
}

impl CloneableCallable {
    /**
     * Bootstrap a holder from any clonable closure.
     */
    pub fn new(f: impl Fn() + Clone + 'static) -> Self {
        CloneableCallable { func: Box::new(f) }
    }

    pub fn call(&self) {
        self.func.call()
    }
}


#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::CloneableCallable;

    #[derive(Debug)]
    struct ClonableStruct {
        value: String
    }

    impl ClonableStruct {
        fn label(&self) -> String {
            self.value.clone()
        }
    }

    impl Clone for ClonableStruct {
        fn clone(&self) -> Self {
            Self { value: format!("{} cloned", self.value) }
        }
    }

    #[test]
    fn clone_duplicates_captured_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        let state = ClonableStruct { value: "test1".to_string() };
        let holder = CloneableCallable::new(move || l.borrow_mut().push(state.label()));
        let cloned = holder.clone();

        holder.call();
        cloned.call();

        assert_eq!(*log.borrow(), vec!["test1", "test1 cloned"]);
    }

    #[test]
    fn copies_observe_shared_value() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let shared = Rc::new(1);
        let (l1, l2) = (log.clone(), log.clone());
        let (s1, s2) = (shared.clone(), shared.clone());
        let t1 = CloneableCallable::new(move || l1.borrow_mut().push(format!("C={s1}")));
        let t2 = CloneableCallable::new(move || l2.borrow_mut().push(format!("D={s2}")));

        t1.call();
        t2.call();

        assert_eq!(*log.borrow(), vec!["C=1", "D=1"]);
        assert_eq!(Rc::strong_count(&shared), 3);
    }
}
