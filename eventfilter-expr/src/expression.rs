//! Filter expressions
//!
//! [`Expression`] is the untyped tree a caller builds. [`Filter::compile`]
//! resolves every function call against a [`FunctionRegistry`] and
//! type-checks the tree; only a compiled [`Filter`] can be evaluated.
//!
//! Event attributes are typed `String`. A missing attribute is an evaluation
//! error for that event.

use crate::error::{ExprError, Result};
use crate::event::Event;
use crate::function::ScalarFunction;
use crate::registry::FunctionRegistry;
use crate::value::{Value, ValueType};
use std::sync::Arc;

/// Untyped filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Constant value
    Literal(Value),
    /// Event attribute reference
    Attribute(String),
    /// Function call
    Call { name: String, args: Vec<Expression> },
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Not(Box<Expression>),
}

impl Expression {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    pub fn attribute(name: impl Into<String>) -> Self {
        Expression::Attribute(name.into())
    }

    pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Call {
            name: name.into(),
            args,
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Expression) -> Self {
        Expression::Not(Box::new(inner))
    }
}

/// Type-checked expression node with resolved functions.
#[derive(Debug, Clone)]
enum Node {
    Literal(Value),
    Attribute(String),
    Call {
        function: Arc<dyn ScalarFunction>,
        args: Vec<Node>,
    },
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Not(Box<Node>),
}

/// A compiled, type-checked boolean filter.
///
/// Holds no per-event state; share it across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Filter {
    root: Node,
}

impl Filter {
    /// Resolve and type-check `expr`. The root must be `Boolean`.
    pub fn compile(expr: &Expression, registry: &FunctionRegistry) -> Result<Self> {
        let (root, ty) = compile_node(expr, registry)?;
        if ty != ValueType::Boolean {
            return Err(ExprError::NotBoolean(ty));
        }
        Ok(Self { root })
    }

    /// Evaluate the filter against one event.
    ///
    /// A function failure is returned as [`ExprError::FunctionFailed`], never
    /// as `Ok(false)`. `AND`/`OR` short-circuit left to right, so a failing
    /// right operand is not reached when the left operand decides the result.
    pub fn evaluate(&self, event: &Event) -> Result<bool> {
        eval_bool(&self.root, event)
    }
}

fn compile_node(expr: &Expression, registry: &FunctionRegistry) -> Result<(Node, ValueType)> {
    match expr {
        Expression::Literal(v) => Ok((Node::Literal(v.clone()), v.value_type())),
        Expression::Attribute(name) => Ok((Node::Attribute(name.clone()), ValueType::String)),
        Expression::Call { name, args } => {
            let function = registry
                .get(name)
                .ok_or_else(|| ExprError::UnknownFunction(name.clone()))?;
            let sig = function.signature();
            if args.len() != sig.arity() {
                return Err(ExprError::ArityMismatch {
                    function: sig.name.clone(),
                    expected: sig.arity(),
                    actual: args.len(),
                });
            }

            let mut nodes = Vec::with_capacity(args.len());
            for (i, (arg, expected)) in args.iter().zip(&sig.params).enumerate() {
                let (node, actual) = compile_node(arg, registry)?;
                if actual != *expected {
                    return Err(ExprError::TypeMismatch {
                        context: format!("argument {} of {}", i + 1, sig.name),
                        expected: *expected,
                        actual,
                    });
                }
                nodes.push(node);
            }

            Ok((
                Node::Call {
                    function: Arc::clone(function),
                    args: nodes,
                },
                sig.returns,
            ))
        }
        Expression::And(l, r) => {
            let (l, r) = compile_operands("AND", l, r, registry)?;
            Ok((Node::And(l, r), ValueType::Boolean))
        }
        Expression::Or(l, r) => {
            let (l, r) = compile_operands("OR", l, r, registry)?;
            Ok((Node::Or(l, r), ValueType::Boolean))
        }
        Expression::Not(inner) => {
            let inner = compile_boolean("NOT", inner, registry)?;
            Ok((Node::Not(inner), ValueType::Boolean))
        }
    }
}

fn compile_operands(
    op: &str,
    left: &Expression,
    right: &Expression,
    registry: &FunctionRegistry,
) -> Result<(Box<Node>, Box<Node>)> {
    Ok((
        compile_boolean(op, left, registry)?,
        compile_boolean(op, right, registry)?,
    ))
}

fn compile_boolean(op: &str, expr: &Expression, registry: &FunctionRegistry) -> Result<Box<Node>> {
    let (node, ty) = compile_node(expr, registry)?;
    if ty != ValueType::Boolean {
        return Err(ExprError::TypeMismatch {
            context: format!("operand of {}", op),
            expected: ValueType::Boolean,
            actual: ty,
        });
    }
    Ok(Box::new(node))
}

fn eval(node: &Node, event: &Event) -> Result<Value> {
    match node {
        Node::Literal(v) => Ok(v.clone()),
        Node::Attribute(name) => event
            .attribute(name)
            .map(Value::from)
            .ok_or_else(|| ExprError::MissingAttribute(name.clone())),
        Node::Call { function, args } => {
            let values = args
                .iter()
                .map(|arg| eval(arg, event))
                .collect::<Result<Vec<_>>>()?;
            let name = &function.signature().name;
            let value = function.invoke(event, &values).map_err(|source| {
                tracing::debug!(function = %name, error = %source, "function failed");
                ExprError::FunctionFailed {
                    name: name.clone(),
                    source,
                }
            })?;
            let returns = function.signature().returns;
            if value.value_type() != returns {
                return Err(ExprError::TypeMismatch {
                    context: format!("result of {}", name),
                    expected: returns,
                    actual: value.value_type(),
                });
            }
            Ok(value)
        }
        Node::And(..) | Node::Or(..) | Node::Not(_) => Ok(Value::Boolean(eval_bool(node, event)?)),
    }
}

fn eval_bool(node: &Node, event: &Event) -> Result<bool> {
    match node {
        Node::And(l, r) => Ok(eval_bool(l, event)? && eval_bool(r, event)?),
        Node::Or(l, r) => Ok(eval_bool(l, event)? || eval_bool(r, event)?),
        Node::Not(inner) => Ok(!eval_bool(inner, event)?),
        other => {
            let value = eval(other, event)?;
            value.as_bool().ok_or_else(|| ExprError::TypeMismatch {
                context: "boolean context".to_string(),
                expected: ValueType::Boolean,
                actual: value.value_type(),
            })
        }
    }
}
