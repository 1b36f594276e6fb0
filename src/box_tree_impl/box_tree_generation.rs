//! Random generation of well-formed expressions, used to exercise the parser
//! and printer against each other.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::box_tree_impl::box_tree_ast::ExprNode;

/// Names drawn on by `generate_random_expr`. Includes names that look like
/// fresh names and names with underscores so the printer and parser see them.
pub const DEFAULT_VAR_NAMES: [&str; 8] = ["x", "y", "z", "f", "_g", "y1", "long_name", "A9"];

/// Generates a random expression no deeper than `max_depth`, with variable
/// and parameter names picked from `var_names`.
pub fn generate_random_expr<R: Rng>(
    rng: &mut R,
    max_depth: usize,
    var_names: &[&str],
) -> Box<ExprNode> {
    let var_name = *var_names.choose(rng).unwrap_or(&"x");

    if max_depth == 0 {
        return ExprNode::var(var_name);
    }

    match rng.gen_range(0..3) {
        0 => {
            return ExprNode::var(var_name);
        }
        1 => {
            let fn_body = generate_random_expr(rng, max_depth - 1, var_names);
            return ExprNode::fn_def(var_name, fn_body);
        }
        _ => {
            let fn_body = generate_random_expr(rng, max_depth - 1, var_names);
            let actual_arg = generate_random_expr(rng, max_depth - 1, var_names);
            return ExprNode::fn_app(fn_body, actual_arg);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::box_tree_impl::box_tree_recursive_descent_parsing::parse_expression;

    use super::*;

    // Returns how deep the expression goes; a bare variable has depth 0.
    fn depth(expr_node: &ExprNode) -> usize {
        match expr_node {
            ExprNode::Var { .. } => return 0,
            ExprNode::FnDef { fn_body, .. } => return 1 + depth(fn_body),
            ExprNode::FnApp {
                fn_body,
                actual_arg,
            } => return 1 + depth(fn_body).max(depth(actual_arg)),
        }
    }

    #[test]
    fn test_generated_depth_is_bounded() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let expr_node = generate_random_expr(&mut rng, 5, &DEFAULT_VAR_NAMES);
            assert!(depth(&expr_node) <= 5);
        }
    }

    // Printing then parsing gives back the same tree.
    #[test]
    fn test_print_parse_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..500 {
            let expr_node = generate_random_expr(&mut rng, 6, &DEFAULT_VAR_NAMES);
            let printed = expr_node.to_string();

            assert_eq!(parse_expression(&printed), Ok(expr_node), "{printed}");
        }
    }

    // The compact form without optional spaces parses to the same tree too.
    #[test]
    fn test_compact_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let expr_node = generate_random_expr(&mut rng, 5, &DEFAULT_VAR_NAMES);
            let compact = expr_node
                .to_string()
                .replace("% ", "%")
                .replace(" . ", ".")
                .replace(" + ", "+");

            assert_eq!(parse_expression(&compact), Ok(expr_node), "{compact}");
        }
    }
}
