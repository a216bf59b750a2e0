//! Typed filter expressions over event attributes.
//!
//! A [`FunctionRegistry`] is populated before any filter is compiled
//! (see [`register_spatial_functions`]). [`Filter::compile`] resolves and
//! type-checks an [`Expression`] against it; the resulting [`Filter`] is
//! evaluated once per [`Event`].
//!
//! ```
//! use eventfilter_expr::{register_spatial_functions, Event, Expression, Filter, FunctionRegistry};
//! use eventfilter_spatial::IntersectsConfig;
//!
//! let mut registry = FunctionRegistry::new();
//! register_spatial_functions(&mut registry, &IntersectsConfig::default()).unwrap();
//!
//! let expr = Expression::call(
//!     "INTERSECTS",
//!     vec![
//!         Expression::attribute("location"),
//!         Expression::literal("POLYGON((0 0,0 2,2 2,2 0,0 0))"),
//!     ],
//! );
//! let filter = Filter::compile(&expr, &registry).unwrap();
//!
//! let event = Event::new().with_attribute("location", "POINT(1 1)");
//! assert!(filter.evaluate(&event).unwrap());
//! ```

pub mod error;
pub mod event;
pub mod expression;
pub mod function;
pub mod registry;
pub mod value;

pub use error::{BoxError, ExprError, Result};
pub use event::Event;
pub use expression::{Expression, Filter};
pub use function::{register_spatial_functions, FunctionSignature, IntersectsFunction, ScalarFunction};
pub use registry::FunctionRegistry;
pub use value::{Value, ValueType};
