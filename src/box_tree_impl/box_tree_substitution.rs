//! Capture-avoiding substitution over the box-tree representation.

use std::collections::HashSet;

use tracing::trace;

use crate::box_tree_impl::box_tree_ast::ExprNode;
use crate::box_tree_impl::fresh_names::FreshNameGenerator;

/// Adds to `free_vars` every variable of `expr_body` that is not bound by an
/// enclosing `FnDef`, either inside `expr_body` or in `bound_vars`.
/// `bound_vars` is handed back exactly as it came in.
fn collect_free_variables<'a>(
    expr_body: &'a ExprNode,
    bound_vars: &mut HashSet<&'a str>,
    free_vars: &mut HashSet<&'a str>,
) {
    match expr_body {
        ExprNode::Var { var_name } => {
            if !bound_vars.contains(var_name.as_str()) {
                free_vars.insert(var_name.as_str());
            }
        }
        ExprNode::FnApp {
            fn_body,
            actual_arg,
        } => {
            collect_free_variables(fn_body, bound_vars, free_vars);
            collect_free_variables(actual_arg, bound_vars, free_vars);
        }
        ExprNode::FnDef {
            formal_param,
            fn_body,
        } => {
            // An inner binder of an already bound name must not unbind it on
            // the way out.
            let newly_bound = bound_vars.insert(formal_param.as_str());
            collect_free_variables(fn_body, bound_vars, free_vars);
            if newly_bound {
                bound_vars.remove(formal_param.as_str());
            }
        }
    };
}

/// Computes the free variables in the given lambda calculus expression.
fn get_all_free_variables(expr_body: &ExprNode) -> HashSet<&str> {
    let mut bound_vars = HashSet::new();
    let mut free_vars = HashSet::new();
    collect_free_variables(expr_body, &mut bound_vars, &mut free_vars);
    return free_vars;
}

/// Returns a new expression equal to `expr_body` with every free occurrence of
/// `var_name` replaced by a copy of `var_value`. A binder that would capture a
/// free variable of `var_value` is renamed to a fresh name first, and the
/// substitution is retried on the renamed function.
pub fn substitute(
    expr_body: &ExprNode,
    var_name: &str,
    var_value: &ExprNode,
    fresh_names: &mut FreshNameGenerator,
) -> Box<ExprNode> {
    match expr_body {
        // Substitute into variable.
        ExprNode::Var {
            var_name: curr_var_name,
        } => {
            if curr_var_name == var_name {
                return Box::new(var_value.clone());
            }
            return Box::new(expr_body.clone());
        }

        // Substitute into both sides of a function application.
        ExprNode::FnApp {
            fn_body,
            actual_arg,
        } => {
            let subbed_fn_body = substitute(fn_body, var_name, var_value, fresh_names);
            let subbed_actual_arg = substitute(actual_arg, var_name, var_value, fresh_names);

            return ExprNode::fn_app(subbed_fn_body, subbed_actual_arg);
        }

        // Substitute into a function definition.
        ExprNode::FnDef {
            formal_param,
            fn_body,
        } => {
            // The formal param shadows var_name, so there is nothing to do.
            if formal_param == var_name {
                return Box::new(expr_body.clone());
            }

            // To prevent variable capture, rename the formal param if var_value
            // contains it as a free variable, then retry on the renamed
            // function.
            if get_all_free_variables(var_value).contains(formal_param.as_str()) {
                let new_formal_param = fresh_names.fresh_name(formal_param);
                trace!(
                    old_param = formal_param.as_str(),
                    new_param = new_formal_param.as_str(),
                    "alpha converting to avoid capture"
                );

                let renamed_fn_body = substitute(
                    fn_body,
                    formal_param,
                    &ExprNode::Var {
                        var_name: new_formal_param.clone(),
                    },
                    fresh_names,
                );
                let renamed_fn_def = ExprNode::fn_def(new_formal_param, renamed_fn_body);

                return substitute(&renamed_fn_def, var_name, var_value, fresh_names);
            }

            let subbed_fn_body = substitute(fn_body, var_name, var_value, fresh_names);
            return ExprNode::fn_def(formal_param.as_str(), subbed_fn_body);
        }
    };
}
