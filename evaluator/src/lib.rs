//! Runtime object model and sandboxed literal evaluation.
//!
//! A [`Realm`] stands in for the global environment a script runs in: constructors, prototypes,
//! the document singleton and whatever globals the host injects. [`LiteralEvaluator`] infers the
//! class of a literal expression without executing anything.

mod builtins;
mod error;
mod literal;
mod realm;
mod value;

pub use error::{EvalError, RuntimeError};
pub use literal::{ExpressionEvaluator, Literal, LiteralEvaluator};
pub use realm::{Callable, ObjectData, Realm, standard_realm};
pub use value::{ObjectId, Value};
