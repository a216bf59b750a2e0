//! User-defined scalar functions
//!
//! A function declares a fixed [`FunctionSignature`] that the filter compiler
//! checks every call against, so implementations receive arguments of the
//! declared types only.
//!
//! Category submodules: `geo`

mod geo;

use crate::error::BoxError;
use crate::event::Event;
use crate::value::{Value, ValueType};
use std::fmt::Debug;

pub use geo::{register_spatial_functions, IntersectsFunction};

/// Name, parameter types and return type of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<ValueType>,
    pub returns: ValueType,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, params: Vec<ValueType>, returns: ValueType) -> Self {
        Self {
            name: name.into(),
            params,
            returns,
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A function callable from filter expressions.
pub trait ScalarFunction: Debug + Send + Sync {
    fn signature(&self) -> &FunctionSignature;

    /// Invoke the function for one event.
    ///
    /// `args` match `signature().params` in count and type.
    fn invoke(&self, event: &Event, args: &[Value]) -> Result<Value, BoxError>;
}
