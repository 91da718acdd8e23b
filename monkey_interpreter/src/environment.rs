use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A shared handle to an environment. Closures and child scopes hold one of
/// these, so a scope stays alive as long as anything can still look into it.
pub type Env = Rc<RefCell<Environment>>;

// --- Environment ---

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates an outermost environment.
    pub fn new() -> Env {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Creates a scope whose lookups fall through to `outer` on a miss.
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.get(name) {
            Some(value.clone())
        } else if let Some(outer) = &self.outer {
            outer.borrow().get(name)
        } else {
            None
        }
    }

    /// Binds `name` in this scope only, shadowing any outer binding, and
    /// returns the bound value.
    pub fn set(&mut self, name: impl Into<String>, value: Object) -> Object {
        self.store.insert(name.into(), value.clone());
        value
    }
}
