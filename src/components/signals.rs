// Signals for communication between components

use bevy_ecs::prelude::Component;
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-entity signal storage written by controllers and read by animation rules.
#[derive(Debug, Clone, Component, Default)]
pub struct Signals {
    pub integers: FxHashMap<String, i32>,
    pub flags: FxHashSet<String>,
}

impl Signals {
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.set_flag(key);
        self
    }
    pub fn with_integer(mut self, key: impl Into<String>, value: i32) -> Self {
        self.set_integer(key, value);
        self
    }
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Set or clear a flag depending on `on`.
    pub fn put_flag(&mut self, key: &str, on: bool) {
        if on {
            self.set_flag(key);
        } else {
            self.clear_flag(key);
        }
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_flag_toggles() {
        let mut s = Signals::default();
        s.put_flag("moving", true);
        assert!(s.has_flag("moving"));
        s.put_flag("moving", false);
        assert!(!s.has_flag("moving"));
    }

    #[test]
    fn test_builders() {
        let s = Signals::default().with_flag("a").with_integer("facing", 3);
        assert!(s.has_flag("a"));
        assert_eq!(s.get_integer("facing"), Some(3));
        assert_eq!(s.get_integer("missing"), None);
    }
}
