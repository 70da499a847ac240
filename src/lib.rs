//! Purpose: Composable lazy-evaluation and stream-copy primitives behind small capability traits.
//! Exports: `core` (scalars, funcs, byte sources/sinks, tee copying, errors) plus root re-exports.
//! Role: Library only; no CLI, no network surface, no background threads.
//! Invariants: Capabilities open resources on invocation, never at construction.
//! Invariants: Recoverable failures travel as `Error`; the unchecked boundary is the only escalation point.
pub mod core;

pub use crate::core::error::{Error, ErrorKind, Phase};
pub use crate::core::func::{ConstFunc, Func, FuncWithFallback};
pub use crate::core::input::{BytesInput, FileInput, Input, UriInput};
pub use crate::core::output::{BufferOutput, FileOutput, Output, SinkOutput};
pub use crate::core::scalar::{Scalar, Sticky};
pub use crate::core::tee::{Tee, DEFAULT_CHUNK};
pub use crate::core::unchecked::{Fatal, Unchecked, UncheckedFunc};
