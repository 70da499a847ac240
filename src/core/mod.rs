// Core modules implementing lazy evaluation, byte capabilities, and error modeling.
pub mod error;
pub mod func;
pub mod input;
pub mod output;
pub mod scalar;
pub mod tee;
pub mod unchecked;
