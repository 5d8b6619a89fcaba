//! Runtime value types shared across the host/compiler boundary.
//!
//! # Immutability
//! Values are immutable after construction and hold only `Arc`-shared data,
//! so equality, hashing, and printing are safe to call from any thread
//! without locking. None of them perform I/O or invoke host callbacks.
//!
//! # Compile contexts
//! Compiler functions hold a non-owning [`compile_context::ContextToken`].
//! The compilation owns the [`compile_context::CompileContext`]; dropping it
//! does not invalidate tokens for identity purposes, it only makes them
//! report as no longer live.
use std::sync::Arc;

use crate::runtime::value::Value;

pub mod compile_context;
pub mod function_error;
pub mod sass_function;
pub mod stable_hash;
pub mod value;

pub use compile_context::{CompileContext, ContextToken};
pub use function_error::{FunctionError, FunctionResult};
pub use sass_function::{FunctionDescriptor, FunctionParts, SassFunction};

pub type HostCallback = Arc<dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync>;
