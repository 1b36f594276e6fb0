//! Data structures to represent lambda calculus expressions and driver
//! statements, and the printer for the `%x.body` / `<f + a>` syntax.

/// Represents a binding statement (`name = expr`) or an evaluation statement
/// (a bare expression) read from one input line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Statement {
    Def {
        def_name: String,
        def_body: Box<ExprNode>,
    },
    Eval {
        eval_body: Box<ExprNode>,
    },
}

/// Represents a lambda-calculus expression. Every node owns its children, so
/// `clone` is a deep copy and no two trees ever share a node.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ExprNode {
    FnDef {
        formal_param: String,
        fn_body: Box<ExprNode>,
    },
    FnApp {
        fn_body: Box<ExprNode>,
        actual_arg: Box<ExprNode>,
    },
    Var {
        var_name: String,
    },
}

impl ExprNode {
    /// Builds `var_name`.
    pub fn var(var_name: impl Into<String>) -> Box<ExprNode> {
        return Box::new(ExprNode::Var {
            var_name: var_name.into(),
        });
    }

    /// Builds `% formal_param . fn_body`.
    pub fn fn_def(formal_param: impl Into<String>, fn_body: Box<ExprNode>) -> Box<ExprNode> {
        return Box::new(ExprNode::FnDef {
            formal_param: formal_param.into(),
            fn_body: fn_body,
        });
    }

    /// Builds `<fn_body + actual_arg>`.
    pub fn fn_app(fn_body: Box<ExprNode>, actual_arg: Box<ExprNode>) -> Box<ExprNode> {
        return Box::new(ExprNode::FnApp {
            fn_body: fn_body,
            actual_arg: actual_arg,
        });
    }
}

// Helper function to produce a string representation of an ExprNode. No
// parentheses are ever needed: the angle brackets delimit every application.
fn expr_node_to_string_helper(expr_node: &ExprNode, string_so_far: &mut String) {
    match expr_node {
        ExprNode::Var { var_name } => {
            string_so_far.push_str(var_name.as_str());
        }
        ExprNode::FnApp {
            fn_body,
            actual_arg,
        } => {
            string_so_far.push('<');
            expr_node_to_string_helper(fn_body, string_so_far);
            string_so_far.push_str(" + ");
            expr_node_to_string_helper(actual_arg, string_so_far);
            string_so_far.push('>');
        }
        ExprNode::FnDef {
            formal_param,
            fn_body,
        } => {
            string_so_far.push_str(format!("% {} . ", formal_param.as_str()).as_str());
            expr_node_to_string_helper(fn_body, string_so_far);
        }
    };
}

/// Converts an expr node to a string in the same syntax the parser reads.
pub fn expr_node_to_string(expr_node: &ExprNode) -> String {
    let mut out_string = String::new();
    expr_node_to_string_helper(expr_node, &mut out_string);
    return out_string;
}

// Display trait implementation for ExprNode using expr_node_to_string function.
impl std::fmt::Display for ExprNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", expr_node_to_string(self).as_str());
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Def { def_name, def_body } => {
                return write!(f, "{} = {}", def_name, def_body);
            }
            Statement::Eval { eval_body } => {
                return write!(f, "{}", eval_body);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_node_to_string_succ() {
        let expected_output = r"% n . % f . % x . <f + <<n + f> + x>>";

        let test_input = ExprNode::fn_def(
            "n",
            ExprNode::fn_def(
                "f",
                ExprNode::fn_def(
                    "x",
                    ExprNode::fn_app(
                        ExprNode::var("f"),
                        ExprNode::fn_app(
                            ExprNode::fn_app(ExprNode::var("n"), ExprNode::var("f")),
                            ExprNode::var("x"),
                        ),
                    ),
                ),
            ),
        );

        assert_eq!(expected_output, format!("{}", test_input).as_str());
    }

    // A lambda in function position needs no extra delimiters.
    #[test]
    fn test_expr_node_to_string_lambda_in_app() {
        let test_input = ExprNode::fn_app(
            ExprNode::fn_def("x", ExprNode::var("x")),
            ExprNode::fn_def("y", ExprNode::var("y")),
        );

        assert_eq!("<% x . x + % y . y>", test_input.to_string());
    }

    #[test]
    fn test_statement_to_string() {
        let def_statement = Statement::Def {
            def_name: String::from("id"),
            def_body: ExprNode::fn_def("x", ExprNode::var("x")),
        };
        let eval_statement = Statement::Eval {
            eval_body: ExprNode::fn_app(ExprNode::var("id"), ExprNode::var("y")),
        };

        assert_eq!("id = % x . x", def_statement.to_string());
        assert_eq!("<id + y>", eval_statement.to_string());
    }

    // Clones are deep: rebuilding one tree leaves the other untouched.
    #[test]
    fn test_clone_is_independent() {
        let original = ExprNode::fn_def("x", ExprNode::var("x"));
        let mut copy = original.clone();

        if let ExprNode::FnDef { fn_body, .. } = &mut *copy {
            *fn_body = ExprNode::var("z");
        }

        assert_eq!("% x . x", original.to_string());
        assert_eq!("% x . z", copy.to_string());
    }
}
