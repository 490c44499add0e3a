//! Observer adapter - replays an effect log to registered listeners
//!
//! Listeners never run inside the cascade. The session hands them the finished
//! log, in order, once a move has fully resolved.

use crate::types::Effect;

pub type Listener<T> = Box<dyn FnMut(&Effect<T>) + Send>;

pub struct Observers<T> {
    listeners: Vec<Listener<T>>,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn add<F>(&mut self, listener: F)
    where
        F: FnMut(&Effect<T>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver each effect to every listener, effects in log order
    pub fn replay(&mut self, effects: &[Effect<T>]) {
        for effect in effects {
            for listener in &mut self.listeners {
                listener(effect);
            }
        }
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
