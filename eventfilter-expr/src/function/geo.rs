//! Geospatial function implementations
//!
//! Implements `INTERSECTS(String, String) -> Boolean` on top of
//! [`SpatialIntersects`].

use crate::error::{BoxError, Result};
use crate::event::Event;
use crate::registry::FunctionRegistry;
use crate::value::{Value, ValueType};
use eventfilter_spatial::{IntersectsConfig, SpatialIntersects, INTERSECTS};
use std::sync::Arc;

use super::{FunctionSignature, ScalarFunction};

/// `INTERSECTS(geom1, geom2)`: whether two WKT geometries intersect.
#[derive(Debug, Clone)]
pub struct IntersectsFunction {
    signature: FunctionSignature,
    predicate: SpatialIntersects,
}

impl IntersectsFunction {
    pub fn new(config: &IntersectsConfig) -> Self {
        Self::from_predicate(SpatialIntersects::new(config))
    }

    pub fn from_predicate(predicate: SpatialIntersects) -> Self {
        Self {
            signature: FunctionSignature::new(
                INTERSECTS,
                vec![ValueType::String, ValueType::String],
                ValueType::Boolean,
            ),
            predicate,
        }
    }

    pub fn predicate(&self) -> &SpatialIntersects {
        &self.predicate
    }
}

impl ScalarFunction for IntersectsFunction {
    fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    fn invoke(&self, _event: &Event, args: &[Value]) -> std::result::Result<Value, BoxError> {
        match args {
            [Value::String(geom1), Value::String(geom2)] => {
                let intersects = self.predicate.evaluate(geom1, geom2)?;
                Ok(Value::Boolean(intersects))
            }
            _ => Err(format!("{} called with {:?}", INTERSECTS, args).into()),
        }
    }
}

/// Register the spatial functions into `registry`.
///
/// Fails if any of them is already registered.
pub fn register_spatial_functions(
    registry: &mut FunctionRegistry,
    config: &IntersectsConfig,
) -> Result<()> {
    registry.register(Arc::new(IntersectsFunction::new(config)))?;
    tracing::info!(
        function = INTERSECTS,
        strategy = config.strategy.as_str(),
        "registered spatial function"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExprError;
    use eventfilter_spatial::{Argument, IntersectionStrategy, IntersectsError};

    #[test]
    fn test_signature() {
        let f = IntersectsFunction::new(&IntersectsConfig::default());
        let sig = f.signature();
        assert_eq!(sig.name, "INTERSECTS");
        assert_eq!(sig.params, vec![ValueType::String, ValueType::String]);
        assert_eq!(sig.returns, ValueType::Boolean);
        assert_eq!(sig.arity(), 2);
    }

    #[test]
    fn test_invoke() {
        let f = IntersectsFunction::new(&IntersectsConfig::default());
        let event = Event::new();
        let result = f
            .invoke(
                &event,
                &[
                    Value::from("POINT(1 1)"),
                    Value::from("POLYGON((0 0,0 2,2 2,2 0,0 0))"),
                ],
            )
            .unwrap();
        assert_eq!(result, Value::Boolean(true));
    }

    #[test]
    fn test_invoke_parse_error_keeps_argument() {
        let f = IntersectsFunction::new(&IntersectsConfig::default());
        let err = f
            .invoke(
                &Event::new(),
                &[Value::from("POINT(1 1)"), Value::from("POINT(1 1")],
            )
            .unwrap_err();
        let err = err.downcast_ref::<IntersectsError>().unwrap();
        assert_eq!(err.argument(), Argument::Second);
    }

    #[test]
    fn test_register_uses_configured_strategy() {
        let mut registry = FunctionRegistry::new();
        let config = IntersectsConfig::new(IntersectionStrategy::BoundingBox);
        register_spatial_functions(&mut registry, &config).unwrap();
        assert!(registry.contains("intersects"));

        let err = register_spatial_functions(&mut registry, &config).unwrap_err();
        assert!(matches!(err, ExprError::DuplicateFunction(name) if name == "INTERSECTS"));
    }
}
