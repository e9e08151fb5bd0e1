use crate::Value;

/// State of a single top level render.
///
/// Holds the placeholder counter used by dialects with numbered placeholders
/// and the arguments bound so far, in the order their placeholders were
/// written. Nested subqueries share the context of the enclosing statement, a
/// new statement needs a new context (or [`Context::reset`]).
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Context {
    pub counter: u32,
    args: Vec<Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the placeholder counter and return the new value, starting from 1.
    pub fn next_counter(&mut self) -> u32 {
        self.counter += 1;
        self.counter
    }

    pub fn push_arg(&mut self, value: Value) {
        self.args.push(value);
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn into_args(self) -> Vec<Value> {
        self.args
    }

    /// Start numbering from 1 again and drop the bound arguments.
    pub fn reset(&mut self) {
        self.counter = 0;
        self.args.clear();
    }
}
