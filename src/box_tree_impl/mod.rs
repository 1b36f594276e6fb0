//! Parser, substitution and evaluation code that represents expressions as a
//! tree where each node owns its children via `Box` smart pointers.

pub mod box_tree_ast;
pub mod box_tree_execution;
#[cfg(test)]
mod box_tree_generation;
pub mod box_tree_recursive_descent_parsing;
pub mod box_tree_substitution;
pub mod fresh_names;
