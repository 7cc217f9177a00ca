//! Whole-matrix scans: predicates, in-place transforms, fills.
use super::Mat;

impl Mat {
    /// True iff the predicate holds for every element. Short-circuits on
    /// the first failure.
    pub fn all<F>(&self, mut f: F) -> bool
    where
        F: FnMut(f64) -> bool,
    {
        self.data.iter().all(|&v| f(v))
    }

    /// True iff the predicate holds for at least one element.
    /// Short-circuits on the first success.
    pub fn any<F>(&self, mut f: F) -> bool
    where
        F: FnMut(f64) -> bool,
    {
        self.data.iter().any(|&v| f(v))
    }

    /// Replaces every element with `f(element)`, visiting in row-major
    /// order. Mutates the receiver and returns it for chaining.
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(f64) -> f64,
    {
        for v in &mut self.data {
            *v = f(*v);
        }
        self
    }

    /// Sets every element to the given value.
    pub fn set_all(&mut self, value: f64) -> &mut Self {
        for v in &mut self.data {
            *v = value;
        }
        self
    }

    /// Replaces every element with its hyperbolic tangent.
    pub fn tanh(&mut self) -> &mut Self {
        self.map(f64::tanh)
    }
}
