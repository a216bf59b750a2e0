//! Function registry
//!
//! An owned table of [`ScalarFunction`]s keyed by upper-cased name. The
//! registry is built before any filter is compiled and passed to
//! [`Filter::compile`](crate::Filter::compile); there is no process-wide table.

use crate::error::{ExprError, Result};
use crate::function::ScalarFunction;
use std::collections::HashMap;
use std::sync::Arc;

/// Functions available to filter expressions. Lookup is case-insensitive.
#[derive(Debug, Default, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn ScalarFunction>>,
}

impl FunctionRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function. Errors if the name is already taken.
    pub fn register(&mut self, function: Arc<dyn ScalarFunction>) -> Result<()> {
        let key = function.signature().name.to_ascii_uppercase();
        if self.functions.contains_key(&key) {
            return Err(ExprError::DuplicateFunction(key));
        }
        tracing::debug!(function = %key, arity = function.signature().arity(), "function registered");
        self.functions.insert(key, function);
        Ok(())
    }

    /// Return the function registered under `name`
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ScalarFunction>> {
        self.functions.get(&name.to_ascii_uppercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::event::Event;
    use crate::function::FunctionSignature;
    use crate::value::{Value, ValueType};

    #[derive(Debug)]
    struct Constant(FunctionSignature);

    impl Constant {
        fn named(name: &str) -> Arc<dyn ScalarFunction> {
            Arc::new(Constant(FunctionSignature::new(
                name,
                vec![],
                ValueType::Boolean,
            )))
        }
    }

    impl ScalarFunction for Constant {
        fn signature(&self) -> &FunctionSignature {
            &self.0
        }

        fn invoke(&self, _: &Event, _: &[Value]) -> std::result::Result<Value, BoxError> {
            Ok(Value::Boolean(true))
        }
    }

    #[test]
    fn test_registry() {
        let mut registry = FunctionRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("always").is_none());

        registry.register(Constant::named("always")).unwrap();
        registry.register(Constant::named("Also")).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("ALWAYS"));
        assert!(registry.contains("also"));
        assert_eq!(registry.names(), vec!["ALSO", "ALWAYS"]);
    }

    #[test]
    fn test_duplicate_is_rejected_case_insensitively() {
        let mut registry = FunctionRegistry::new();
        registry.register(Constant::named("always")).unwrap();

        let err = registry.register(Constant::named("ALWAYS")).unwrap_err();
        assert!(matches!(err, ExprError::DuplicateFunction(name) if name == "ALWAYS"));
        assert_eq!(registry.len(), 1);
    }
}
