//! Value-or-producer attribute bindings
//!
//! Widget attributes (text, position, size, colors) can either hold a plain
//! value or a zero-argument producer that is re-invoked on every read. This
//! gives widgets live bindings to game state without the widget knowing where
//! the value comes from.
//!
//! # Example
//!
//! ```rust
//! use game_hud::binding::Binding;
//!
//! let label: Binding<String> = "PLAY".to_string().into();
//! assert_eq!(label.resolve(), "PLAY");
//!
//! let frames = std::rc::Rc::new(std::cell::Cell::new(0u32));
//! let counter = frames.clone();
//! let live = Binding::bind(move || format!("frame {}", counter.get()));
//! frames.set(7);
//! assert_eq!(live.resolve(), "frame 7");
//! ```

use serde::de::Deserializer;
use serde::Deserialize;
use std::fmt;

/// A widget attribute that is either a stored value or a producer function.
///
/// Producers must return a value of the attribute's type on every call; there
/// is no caching between reads.
pub enum Binding<T> {
    /// A plain stored value.
    Value(T),

    /// A zero-argument producer invoked on every [`resolve`](Binding::resolve).
    Producer(Box<dyn Fn() -> T>),
}

impl<T: Clone> Binding<T> {
    /// Reads the current value, invoking the producer if one is bound.
    pub fn resolve(&self) -> T {
        match self {
            Binding::Value(v) => v.clone(),
            Binding::Producer(f) => f(),
        }
    }
}

impl<T> Binding<T> {
    /// Binds a producer function.
    pub fn bind(producer: impl Fn() -> T + 'static) -> Self {
        Binding::Producer(Box::new(producer))
    }

    /// Replaces the binding with a stored value.
    pub fn set(&mut self, value: T) {
        *self = Binding::Value(value);
    }

    /// Replaces the binding with a producer function.
    pub fn set_producer(&mut self, producer: impl Fn() -> T + 'static) {
        *self = Binding::Producer(Box::new(producer));
    }
}

impl<T> From<T> for Binding<T> {
    fn from(value: T) -> Self {
        Binding::Value(value)
    }
}

impl From<&str> for Binding<String> {
    fn from(value: &str) -> Self {
        Binding::Value(value.to_string())
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Binding::Value(v) => f.debug_tuple("Binding::Value").field(v).finish(),
            Binding::Producer(_) => f.write_str("Binding::Producer(..)"),
        }
    }
}

// Theme files can only describe stored values; producers are bound in code.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Binding<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Binding::Value)
    }
}
