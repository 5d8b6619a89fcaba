use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{
        Arc, Weak,
        atomic::{AtomicU64, Ordering},
    },
};

use tracing::debug;

use crate::runtime::sass_function::SassFunction;

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
struct ContextSlot {
    serial: u64,
}

/// One compilation's identity.
///
/// The compilation owns this value; compiler functions only ever hold a
/// [`ContextToken`] pointing back at it. Two contexts are never the same,
/// even if their serial numbers were somehow reused.
#[derive(Debug)]
pub struct CompileContext {
    slot: Arc<ContextSlot>,
}

impl Default for CompileContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CompileContext {
    /// Mints a fresh context token for a new compilation.
    pub fn new() -> Self {
        let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
        debug!(serial, "minted compile context");
        Self {
            slot: Arc::new(ContextSlot { serial }),
        }
    }

    /// Diagnostic number for this context. Not used for identity.
    pub fn serial(&self) -> u64 {
        self.slot.serial
    }

    /// Returns the non-owning handle that compiler functions carry.
    pub fn token(&self) -> ContextToken {
        ContextToken {
            slot: Arc::downgrade(&self.slot),
            serial: self.slot.serial,
        }
    }

    /// Shorthand for `SassFunction::compiler(id, self.token())`.
    pub fn function(&self, id: u32) -> SassFunction {
        SassFunction::compiler(id, self.token())
    }
}

impl Drop for CompileContext {
    fn drop(&mut self) {
        debug!(serial = self.slot.serial, "dropped compile context");
    }
}

/// Non-owning reference to a [`CompileContext`].
///
/// Equality is identity of the minted context. A `Weak` keeps the backing
/// allocation reserved while any token exists, so the address cannot be
/// handed to a later context and produce a false match.
#[derive(Clone)]
pub struct ContextToken {
    slot: Weak<ContextSlot>,
    serial: u64,
}

impl ContextToken {
    /// Whether the owning compilation is still alive.
    pub fn is_live(&self) -> bool {
        self.slot.strong_count() > 0
    }

    pub fn belongs_to(&self, context: &CompileContext) -> bool {
        std::ptr::eq(self.slot.as_ptr(), Arc::as_ptr(&context.slot))
    }

    /// Serial of the context this token was minted from.
    pub fn serial(&self) -> u64 {
        self.serial
    }
}

impl PartialEq for ContextToken {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for ContextToken {}

impl Hash for ContextToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.as_ptr().hash(state);
    }
}

impl fmt::Debug for ContextToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextToken(#{})", self.serial)
    }
}
