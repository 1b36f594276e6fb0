//! Generates fresh variable names for alpha conversion.

use std::collections::HashMap;

use tracing::trace;

/// Hands out names derived from a base name by appending a per-base counter:
/// `y1`, `y2`, ... Counters only ever go up, so a generator never hands out
/// the same name twice. Names the user typed that happen to look like `y1`
/// are not checked against.
#[derive(Debug, Default, Clone)]
pub struct FreshNameGenerator {
    name_counters: HashMap<String, u64>,
}

impl FreshNameGenerator {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Returns a name derived from `base_name` that this generator has never
    /// returned before.
    pub fn fresh_name(&mut self, base_name: &str) -> String {
        let counter = self
            .name_counters
            .entry(String::from(base_name))
            .or_insert(0);
        *counter += 1;

        let new_name = format!("{}{}", base_name, counter);
        trace!(base_name, new_name = new_name.as_str(), "minted fresh name");

        return new_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_per_base_name() {
        let mut fresh_names = FreshNameGenerator::new();

        assert_eq!(fresh_names.fresh_name("y"), "y1");
        assert_eq!(fresh_names.fresh_name("y"), "y2");
        assert_eq!(fresh_names.fresh_name("x"), "x1");
        assert_eq!(fresh_names.fresh_name("y"), "y3");
    }

    // A fresh name can itself be used as a base.
    #[test]
    fn test_derived_base_names() {
        let mut fresh_names = FreshNameGenerator::new();

        let y1 = fresh_names.fresh_name("y");
        assert_eq!(fresh_names.fresh_name(&y1), "y11");
    }

    // Separate generators do not affect each other.
    #[test]
    fn test_generators_are_independent() {
        let mut first = FreshNameGenerator::new();
        let mut second = FreshNameGenerator::new();

        assert_eq!(first.fresh_name("a"), "a1");
        assert_eq!(first.fresh_name("a"), "a2");
        assert_eq!(second.fresh_name("a"), "a1");
    }
}
