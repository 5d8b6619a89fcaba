use thiserror::Error;

pub type FunctionResult<T> = Result<T, FunctionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    #[error("a function cannot carry both a compiler id and a host signature")]
    BothPayloads,

    #[error("a function needs either a compiler id and context or a signature and callback")]
    MissingPayload,

    #[error("compiler function is missing its {missing}")]
    IncompleteCompilerPayload { missing: &'static str },

    #[error("host function is missing its {missing}")]
    IncompleteHostPayload { missing: &'static str },

    #[error("<compiler function {id}> can only be invoked by the compiler")]
    NotCallable { id: u32 },

    #[error("host callback failed: {0}")]
    Callback(String),
}
