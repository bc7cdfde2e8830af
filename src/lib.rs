pub mod ast;
pub mod error;
pub mod interpreter;
pub mod types;

pub use error::{JsError, JsResult};
pub use interpreter::{
    Environments, Evaluated, Evaluator, ExecutionContext, Host, ObjectModel, evaluate,
    evaluate_value,
};
pub use types::{JsObject, JsString, JsValue};
