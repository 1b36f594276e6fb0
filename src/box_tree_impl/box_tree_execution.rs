//! Evaluates lambda-calculus expressions given in the box-tree representation,
//! and keeps the bindings made during a session.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::box_tree_impl::box_tree_ast::{ExprNode, Statement};
use crate::box_tree_impl::box_tree_substitution::substitute;
use crate::box_tree_impl::fresh_names::FreshNameGenerator;

/// Map from bound name to the (unevaluated) expression it stands for.
pub type DefMap = HashMap<String, Box<ExprNode>>;

/// Optional bound on the work a single evaluation may do. A step is one beta
/// reduction or one expansion of a bound name. `max_steps: None` means
/// evaluation runs until it reaches a value, or forever if the term diverges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvalLimits {
    pub max_steps: Option<u64>,
}

/// Errors that may be thrown when evaluating an expression. Only possible when
/// a step limit is set.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EvalError {
    StepLimitExceeded { max_steps: u64 },
}

/// Display trait implementation for EvalError.
impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepLimitExceeded { max_steps } => {
                return write!(f, "Step limit exceeded ({} steps).", max_steps);
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// What executing one statement produced.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ExecutionResult {
    Bound { def_name: String },
    Evaluated { result: Box<ExprNode> },
}

// State threaded through one evaluation.
struct EvalContext<'a> {
    fresh_names: &'a mut FreshNameGenerator,
    limits: EvalLimits,
    steps_taken: u64,
}

impl EvalContext<'_> {
    fn take_step(&mut self) -> Result<(), EvalError> {
        self.steps_taken += 1;

        match self.limits.max_steps {
            Some(max_steps) if self.steps_taken > max_steps => {
                return Err(EvalError::StepLimitExceeded { max_steps });
            }
            _ => return Ok(()),
        }
    }
}

/// Performs eager (applicative order) evaluation of a given lambda calculus
/// expression until it is in weak normal form. Function bodies are never
/// entered. Binding expansions and beta reductions replace the expression
/// being evaluated and go round the loop again, so a divergent term runs in
/// constant stack until it hits the step limit.
fn eval_expr_eager(
    mut expr_body: Box<ExprNode>,
    def_map: &DefMap,
    ctx: &mut EvalContext<'_>,
) -> Result<Box<ExprNode>, EvalError> {
    loop {
        match *expr_body {
            // A bound name evaluates to whatever its definition evaluates to.
            // An unbound name is an open term and stays as it is.
            ExprNode::Var { var_name } => match def_map.get(&var_name) {
                Some(def_body) => {
                    ctx.take_step()?;
                    debug!(var_name = var_name.as_str(), "expanding binding");
                    expr_body = def_body.clone();
                    continue;
                }
                None => {
                    return Ok(ExprNode::var(var_name));
                }
            },

            // A function definition is already a value.
            ExprNode::FnDef {
                formal_param,
                fn_body,
            } => {
                return Ok(ExprNode::fn_def(formal_param, fn_body));
            }

            // Evaluate both sides, function first, then reduce if the function
            // is a function definition.
            ExprNode::FnApp {
                fn_body,
                actual_arg,
            } => {
                let evaluated_fn = eval_expr_eager(fn_body, def_map, ctx)?;
                let evaluated_arg = eval_expr_eager(actual_arg, def_map, ctx)?;

                match *evaluated_fn {
                    // We are at a redex.
                    ExprNode::FnDef {
                        formal_param,
                        fn_body: defined_fn,
                    } => {
                        ctx.take_step()?;
                        debug!(
                            formal_param = formal_param.as_str(),
                            step = ctx.steps_taken,
                            "beta reduction"
                        );

                        expr_body = substitute(
                            &defined_fn,
                            formal_param.as_str(),
                            &evaluated_arg,
                            &mut *ctx.fresh_names,
                        );
                        continue;
                    }

                    // The application is stuck.
                    evaluated_fn => {
                        return Ok(ExprNode::fn_app(Box::new(evaluated_fn), evaluated_arg));
                    }
                }
            }
        };
    }
}

/// Evaluates `expr_body` against `def_map`, drawing fresh names for alpha
/// conversion from `fresh_names`.
pub fn evaluate(
    expr_body: &ExprNode,
    def_map: &DefMap,
    fresh_names: &mut FreshNameGenerator,
    limits: EvalLimits,
) -> Result<Box<ExprNode>, EvalError> {
    let mut ctx = EvalContext {
        fresh_names: fresh_names,
        limits: limits,
        steps_taken: 0,
    };

    let result = eval_expr_eager(Box::new(expr_body.clone()), def_map, &mut ctx)?;
    debug!(steps = ctx.steps_taken, "evaluation finished");

    return Ok(result);
}

/// An evaluation session: the bindings made so far and the fresh-name state
/// used for alpha conversion.
#[derive(Debug, Default)]
pub struct Interpreter {
    def_map: DefMap,
    fresh_names: FreshNameGenerator,
    eval_limits: EvalLimits,
}

impl Interpreter {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn with_limits(eval_limits: EvalLimits) -> Self {
        return Self {
            eval_limits: eval_limits,
            ..Self::default()
        };
    }

    /// Stores `def_body` unevaluated under `def_name`, replacing any earlier
    /// binding of that name.
    pub fn create_binding(&mut self, def_name: impl Into<String>, def_body: Box<ExprNode>) {
        let def_name = def_name.into();
        info!(def_name = def_name.as_str(), "binding created");
        self.def_map.insert(def_name, def_body);
    }

    /// Returns the expression bound to `def_name`, if any.
    pub fn get_binding(&self, def_name: &str) -> Option<&ExprNode> {
        return self.def_map.get(def_name).map(|def_body| &**def_body);
    }

    /// Returns all bound names, sorted.
    pub fn binding_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.def_map.keys().map(String::as_str).collect();
        names.sort_unstable();
        return names;
    }

    /// Evaluates `expr_body` against the current bindings. The bindings are
    /// borrowed for the whole evaluation, so they cannot change under it.
    pub fn evaluate_toplevel(&mut self, expr_body: &ExprNode) -> Result<Box<ExprNode>, EvalError> {
        return evaluate(
            expr_body,
            &self.def_map,
            &mut self.fresh_names,
            self.eval_limits,
        );
    }

    /// Executes a binding or evaluation statement.
    pub fn execute_statement(
        &mut self,
        statement: Statement,
    ) -> Result<ExecutionResult, EvalError> {
        match statement {
            Statement::Def { def_name, def_body } => {
                self.create_binding(def_name.clone(), def_body);
                return Ok(ExecutionResult::Bound { def_name: def_name });
            }
            Statement::Eval { eval_body } => {
                let result = self.evaluate_toplevel(&eval_body)?;
                return Ok(ExecutionResult::Evaluated { result: result });
            }
        }
    }
}
