//! Accessor capability pair bound to whatever field is being tweened.
//!
//! The registry only ever talks to a `Property`: it reads the live value once
//! at start (and each tick for convergence-based kinds) and writes the
//! interpolated value back. Hosts either implement `Property` directly, which
//! is how dynamically typed bindings plug in, or wrap a typed getter/setter
//! pair in an `Accessor`.

use std::fmt;

use crate::value::{Animatable, Value};

pub trait Property {
    /// Current value of the target. Called repeatedly; must not have side effects.
    fn get(&self) -> Value;

    /// Apply a new value to the target.
    fn set(&mut self, value: Value);
}

/// `Property` built from a typed getter and setter.
pub struct Accessor<T: Animatable> {
    getter: Box<dyn Fn() -> T>,
    setter: Box<dyn FnMut(T)>,
}

impl<T: Animatable> Accessor<T> {
    pub fn new(getter: impl Fn() -> T + 'static, setter: impl FnMut(T) + 'static) -> Self {
        Self {
            getter: Box::new(getter),
            setter: Box::new(setter),
        }
    }
}

impl<T: Animatable> Property for Accessor<T> {
    #[inline]
    fn get(&self) -> Value {
        (self.getter)().into_value()
    }

    fn set(&mut self, value: Value) {
        match T::from_value(&value) {
            Some(v) => (self.setter)(v),
            None => log::warn!(
                "accessor for {:?} ignored a {:?} value",
                T::KIND,
                value.kind()
            ),
        }
    }
}

impl<T: Animatable> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").field("kind", &T::KIND).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn accessor_reads_and_writes_through_closures() {
        let cell = Rc::new(Cell::new(1.5f32));
        let (r, w) = (cell.clone(), cell.clone());
        let mut acc = Accessor::new(move || r.get(), move |v| w.set(v));

        assert_eq!(acc.get(), Value::Float(1.5));
        acc.set(Value::Float(4.0));
        assert_eq!(cell.get(), 4.0);
    }

    #[test]
    fn accessor_ignores_wrong_kind() {
        let cell = Rc::new(Cell::new(2i32));
        let (r, w) = (cell.clone(), cell.clone());
        let mut acc = Accessor::new(move || r.get(), move |v| w.set(v));

        acc.set(Value::Text("nope".into()));
        assert_eq!(cell.get(), 2);
    }
}
