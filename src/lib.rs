//! This crate contains an interactive evaluator for an untyped lambda calculus
//! written as `%x.body` for functions and `<f + a>` for applications.

pub mod box_tree_impl;
pub mod end_to_end;
pub mod lexical_analysis;
