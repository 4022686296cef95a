use std::cell::{Cell, RefCell};

use crate::errors::ResolveError;

/// Identifiers currently being resolved, innermost last
///
/// Ids are only recorded with cycle detection enabled, otherwise just the depth is tracked.
pub(crate) struct ResolutionStack {
    detect_cycles: bool,
    depth: Cell<usize>,
    ids: RefCell<Vec<String>>,
}

impl ResolutionStack {
    pub(crate) fn new(detect_cycles: bool) -> Self {
        Self {
            detect_cycles,
            depth: Cell::new(0),
            ids: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn detects_cycles(&self) -> bool {
        self.detect_cycles
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Pushes `id`, popping it again when the guard is dropped
    ///
    /// With cycle detection enabled, fails if `id` is already being resolved.
    pub(crate) fn enter(&self, id: &str) -> Result<StackGuard<'_>, ResolveError> {
        if !self.detect_cycles {
            self.depth.set(self.depth.get() + 1);
            return Ok(StackGuard { stack: self });
        }

        let mut ids = self.ids.borrow_mut();
        if ids.iter().any(|entry| entry == id) {
            let mut chain: Vec<String> = ids
                .iter()
                .skip_while(|entry| *entry != id)
                .cloned()
                .collect();
            chain.push(id.to_string()); // Add current so chain is complete

            tracing::debug!("Circular dependency detected: {}", chain.join(" -> "));
            return Err(ResolveError::CircularDependency { chain });
        }

        ids.push(id.to_string());
        self.depth.set(ids.len());
        Ok(StackGuard { stack: self })
    }
}

pub(crate) struct StackGuard<'a> {
    stack: &'a ResolutionStack,
}
impl Drop for StackGuard<'_> {
    fn drop(&mut self) {
        let stack = self.stack;
        if stack.detect_cycles {
            stack.ids.borrow_mut().pop();
        }
        stack.depth.set(stack.depth.get() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn guard_pops_on_drop() {
        let stack = ResolutionStack::new(true);
        {
            let _a = stack.enter("a").unwrap();
            let _b = stack.enter("b").unwrap();
            assert_eq!(stack.depth(), 2);
        }
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn reports_the_cycle_only() {
        let stack = ResolutionStack::new(true);
        let _root = stack.enter("root").unwrap();
        let _a = stack.enter("a").unwrap();
        let _b = stack.enter("b").unwrap();

        let Err(ResolveError::CircularDependency { chain }) = stack.enter("a") else {
            panic!("expected a circular dependency");
        };
        assert_eq!(chain, vec!["a", "b", "a"]);
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn reentry_is_allowed_without_detection() {
        let stack = ResolutionStack::new(false);
        let _a = stack.enter("a").unwrap();
        let _again = stack.enter("a").unwrap();

        assert_eq!(stack.depth(), 2);
        assert!(stack.ids.borrow().is_empty());
    }
}
