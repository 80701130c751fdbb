//! Activation functions and the registry that resolves node selectors.

use std::collections::HashMap;
use std::fmt;

/// A named, stateless activation function
#[derive(Clone, Copy)]
pub struct ActivationFn {
    name: &'static str,
    func: fn(f64) -> f64,
}

impl ActivationFn {
    pub const fn new(name: &'static str, func: fn(f64) -> f64) -> Self {
        Self { name, func }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the function to a weighted input sum
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

impl fmt::Debug for ActivationFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActivationFn").field(&self.name).finish()
    }
}

impl PartialEq for ActivationFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

pub fn identity(x: f64) -> f64 {
    x
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

pub fn relu(x: f64) -> f64 {
    x.max(0.0)
}

pub fn sin(x: f64) -> f64 {
    x.sin()
}

pub fn cos(x: f64) -> f64 {
    x.cos()
}

pub fn gaussian(x: f64) -> f64 {
    (-x * x).exp()
}

pub fn abs(x: f64) -> f64 {
    x.abs()
}

pub fn square(x: f64) -> f64 {
    x * x
}

/// Heaviside step (0 for x <= 0)
pub fn step(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Built-in catalog registered by [`ActivationRegistry::default`]
pub const BUILTIN: [ActivationFn; 10] = [
    ActivationFn::new("identity", identity),
    ActivationFn::new("sigmoid", sigmoid),
    ActivationFn::new("tanh", tanh),
    ActivationFn::new("relu", relu),
    ActivationFn::new("sin", sin),
    ActivationFn::new("cos", cos),
    ActivationFn::new("gaussian", gaussian),
    ActivationFn::new("abs", abs),
    ActivationFn::new("square", square),
    ActivationFn::new("step", step),
];

/// Maps activation selectors (names) to functions
#[derive(Debug, Clone)]
pub struct ActivationRegistry {
    functions: HashMap<&'static str, ActivationFn>,
}

impl ActivationRegistry {
    /// Registry with no functions at all
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function, replacing any previous one with the same name
    pub fn register(&mut self, name: &'static str, func: fn(f64) -> f64) -> &mut Self {
        self.functions.insert(name, ActivationFn::new(name, func));
        self
    }

    /// Look up a function by name
    pub fn resolve(&self, name: &str) -> Option<ActivationFn> {
        self.functions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for ActivationRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for f in BUILTIN {
            registry.functions.insert(f.name, f);
        }
        registry
    }
}
