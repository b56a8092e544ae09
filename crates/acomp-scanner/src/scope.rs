//! Lexical scope state carried by the scanner.
//!
//! Local variables form a persistent singly linked list: declaring a name
//! pushes a node in front of the current head, and every token keeps a cheap
//! `Rc` handle to the list that was visible where it starts. Function scopes
//! are a second persistent list of frames remembering the outer variables so
//! they can be restored when the function body closes.

use std::rc::Rc;

#[derive(Debug)]
struct VarNode {
    name: String,
    next: LocalVars,
}

/// Chain of locally visible variable names, most recent declaration first.
#[derive(Clone, Debug, Default)]
pub struct LocalVars(Option<Rc<VarNode>>);

impl LocalVars {
    pub fn new() -> Self {
        Self(None)
    }

    /// Return a new chain with `name` in front of `self`.
    pub fn push(&self, name: impl Into<String>) -> Self {
        Self(Some(Rc::new(VarNode {
            name: name.into(),
            next: self.clone(),
        })))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> LocalVarsIter<'_> {
        LocalVarsIter {
            node: self.0.as_deref(),
        }
    }
}

impl PartialEq for LocalVars {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) if Rc::ptr_eq(a, b) => true,
            _ => self.iter().eq(other.iter()),
        }
    }
}

impl Eq for LocalVars {}

pub struct LocalVarsIter<'a> {
    node: Option<&'a VarNode>,
}

impl<'a> Iterator for LocalVarsIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.0.as_deref();
        Some(node.name.as_str())
    }
}

#[derive(Debug)]
struct ScopeFrame {
    /// Variables visible outside the function.
    outer_vars: LocalVars,
    /// Brace depth just inside the function body, once its `{` was seen.
    body_depth: Option<u32>,
    prev: Option<Rc<ScopeFrame>>,
}

/// Scope information attached to every token.
#[derive(Clone, Debug, Default)]
pub struct ScopeState {
    local_vars: LocalVars,
    frames: Option<Rc<ScopeFrame>>,
}

impl ScopeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn local_vars(&self) -> &LocalVars {
        &self.local_vars
    }

    /// Number of enclosing function scopes.
    pub fn function_depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self.frames.as_deref();
        while let Some(f) = frame {
            depth += 1;
            frame = f.prev.as_deref();
        }
        depth
    }

    /// Declare `name` in the innermost scope. Names already visible are not
    /// pushed again.
    pub fn declare(&mut self, name: &str) {
        if !self.local_vars.contains(name) {
            self.local_vars = self.local_vars.push(name);
        }
    }

    /// Enter a function scope. Parameters declared afterwards stay local to it.
    pub fn enter_function(&mut self) {
        self.frames = Some(Rc::new(ScopeFrame {
            outer_vars: self.local_vars.clone(),
            body_depth: None,
            prev: self.frames.take(),
        }));
    }

    /// Whether the innermost function scope is still waiting for its body.
    pub fn awaiting_body(&self) -> bool {
        self.frames
            .as_deref()
            .is_some_and(|frame| frame.body_depth.is_none())
    }

    /// Record the brace depth of the innermost function's body.
    pub fn open_body(&mut self, depth: u32) {
        if let Some(frame) = self.frames.take() {
            self.frames = Some(Rc::new(ScopeFrame {
                outer_vars: frame.outer_vars.clone(),
                body_depth: Some(depth),
                prev: frame.prev.clone(),
            }));
        }
    }

    /// Leave the innermost function scope if `depth` closes its body.
    ///
    /// Returns `true` when a scope was popped.
    pub fn close_brace(&mut self, depth: u32) -> bool {
        let Some(frame) = self.frames.as_deref() else {
            return false;
        };
        match frame.body_depth {
            Some(body) if depth < body => {
                self.local_vars = frame.outer_vars.clone();
                self.frames = frame.prev.clone();
                true
            }
            _ => false,
        }
    }

    /// Abandon a function scope whose body never started (e.g. a bare
    /// `function` expression that was cut off).
    pub fn abandon_pending_function(&mut self) {
        if let Some(frame) = self.frames.as_deref()
            && frame.body_depth.is_none()
        {
            self.local_vars = frame.outer_vars.clone();
            self.frames = frame.prev.clone();
        }
    }
}

impl PartialEq for ScopeState {
    fn eq(&self, other: &Self) -> bool {
        self.local_vars == other.local_vars && self.function_depth() == other.function_depth()
    }
}

impl Eq for ScopeState {}
