use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use serde::Serialize;
use tracing::debug;

use crate::runtime::{
    HostCallback,
    compile_context::ContextToken,
    function_error::{FunctionError, FunctionResult},
    stable_hash,
    value::Value,
};

/// A first-class function value.
///
/// A function lives either inside the compiler, where it is named by an id
/// scoped to one compilation, or on the host, where it is a registered
/// signature plus callback.
///
/// ## Identity
///
/// - Compiler functions are equal when both the context token and the id
///   match. The hash covers the id only, so functions from different
///   compilations may share a bucket but never compare equal.
/// - Host functions are equal only to clones of the same registration. The
///   hash covers the signature only, so separate registrations of the same
///   signature share a bucket but never compare equal.
///
/// The two rules are deliberately asymmetric. Tightening either the hash or
/// the equality of one variant changes which values collapse in containers.
///
/// None of the identity operations look at the callback.
#[derive(Clone)]
pub enum SassFunction {
    Compiler(CompilerFunction),
    Host(HostFunction),
}

/// A function defined inside the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerFunction {
    id: u32,
    context: ContextToken,
}

impl CompilerFunction {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn context(&self) -> &ContextToken {
        &self.context
    }
}

struct HostRegistration {
    signature: Arc<str>,
    callback: HostCallback,
}

/// A function registered by host code.
///
/// Cloning shares the registration; equality is registration identity.
#[derive(Clone)]
pub struct HostFunction {
    registration: Arc<HostRegistration>,
}

impl HostFunction {
    pub fn signature(&self) -> &str {
        &self.registration.signature
    }

    pub fn callback(&self) -> &HostCallback {
        &self.registration.callback
    }
}

impl PartialEq for HostFunction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.registration, &other.registration)
    }
}

impl Eq for HostFunction {}

impl fmt::Debug for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostFunction({})", self.registration.signature)
    }
}

impl SassFunction {
    /// Refers to function `id` inside the compilation that minted `context`.
    pub fn compiler(id: u32, context: ContextToken) -> Self {
        SassFunction::Compiler(CompilerFunction { id, context })
    }

    /// Registers a host function. Each call creates a distinct function,
    /// even when the signature repeats.
    pub fn host<F>(signature: impl Into<Arc<str>>, callback: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self::from_callback(signature, Arc::new(callback))
    }

    /// Like [`SassFunction::host`], for a callback that is already shared.
    pub fn from_callback(signature: impl Into<Arc<str>>, callback: HostCallback) -> Self {
        let signature = signature.into();
        debug!(signature = %signature, "registered host function");
        SassFunction::Host(HostFunction {
            registration: Arc::new(HostRegistration {
                signature,
                callback,
            }),
        })
    }

    pub fn is_compiler(&self) -> bool {
        matches!(self, SassFunction::Compiler(_))
    }

    pub fn is_host(&self) -> bool {
        matches!(self, SassFunction::Host(_))
    }

    pub fn compiler_id(&self) -> Option<u32> {
        match self {
            SassFunction::Compiler(function) => Some(function.id()),
            SassFunction::Host(_) => None,
        }
    }

    pub fn compile_context(&self) -> Option<&ContextToken> {
        match self {
            SassFunction::Compiler(function) => Some(function.context()),
            SassFunction::Host(_) => None,
        }
    }

    pub fn signature(&self) -> Option<&str> {
        match self {
            SassFunction::Compiler(_) => None,
            SassFunction::Host(function) => Some(function.signature()),
        }
    }

    pub fn callback(&self) -> Option<&HostCallback> {
        match self {
            SassFunction::Compiler(_) => None,
            SassFunction::Host(function) => Some(function.callback()),
        }
    }

    /// Process-independent hash. `a == b` implies equal hash codes.
    pub fn hash_code(&self) -> u64 {
        match self {
            SassFunction::Compiler(function) => stable_hash::hash_u64(u64::from(function.id())),
            SassFunction::Host(function) => stable_hash::hash_str(function.signature()),
        }
    }

    /// Runs the host callback with `args` as given.
    ///
    /// Compiler functions are executed by the compiler, never here.
    pub fn call(&self, args: &[Value]) -> FunctionResult<Value> {
        match self {
            SassFunction::Compiler(function) => Err(FunctionError::NotCallable {
                id: function.id(),
            }),
            SassFunction::Host(function) => {
                (function.callback())(args).map_err(FunctionError::Callback)
            }
        }
    }

    pub fn descriptor(&self) -> FunctionDescriptor {
        match self {
            SassFunction::Compiler(function) => FunctionDescriptor::Compiler {
                id: function.id(),
                context: function.context().serial(),
            },
            SassFunction::Host(function) => FunctionDescriptor::Host {
                signature: function.signature().to_string(),
            },
        }
    }
}

impl PartialEq for SassFunction {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SassFunction::Compiler(left), SassFunction::Compiler(right)) => left == right,
            (SassFunction::Host(left), SassFunction::Host(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for SassFunction {}

impl Hash for SassFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for SassFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SassFunction::Compiler(function) => {
                write!(f, "<compiler function {}>", function.id())
            }
            SassFunction::Host(function) => write!(f, "{}", function.signature()),
        }
    }
}

impl fmt::Debug for SassFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SassFunction::Compiler(function) => fmt::Debug::fmt(function, f),
            SassFunction::Host(function) => fmt::Debug::fmt(function, f),
        }
    }
}

/// Serializable summary of a function's identity payload.
///
/// Carries the context serial rather than the token and never the callback,
/// so a function cannot be rebuilt from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FunctionDescriptor {
    Compiler { id: u32, context: u64 },
    Host { signature: String },
}

/// Loose function payload as it arrives from a transport layer.
///
/// [`FunctionParts::build`] accepts exactly one complete payload and rejects
/// everything else.
#[derive(Clone, Default)]
pub struct FunctionParts {
    pub id: Option<u32>,
    pub context: Option<ContextToken>,
    pub signature: Option<String>,
    pub callback: Option<HostCallback>,
}

impl FunctionParts {
    pub fn build(self) -> FunctionResult<SassFunction> {
        let has_compiler = self.id.is_some() || self.context.is_some();
        let has_host = self.signature.is_some() || self.callback.is_some();

        match (has_compiler, has_host) {
            (true, true) => Err(FunctionError::BothPayloads),
            (false, false) => Err(FunctionError::MissingPayload),
            (true, false) => match (self.id, self.context) {
                (Some(id), Some(context)) => Ok(SassFunction::compiler(id, context)),
                (Some(_), None) => Err(FunctionError::IncompleteCompilerPayload {
                    missing: "compile context",
                }),
                _ => Err(FunctionError::IncompleteCompilerPayload { missing: "id" }),
            },
            (false, true) => match (self.signature, self.callback) {
                (Some(signature), Some(callback)) => {
                    Ok(SassFunction::from_callback(signature, callback))
                }
                (Some(_), None) => Err(FunctionError::IncompleteHostPayload {
                    missing: "callback",
                }),
                _ => Err(FunctionError::IncompleteHostPayload {
                    missing: "signature",
                }),
            },
        }
    }
}
