// SPDX-License-Identifier: MIT

//! Function wrappers
//!
//! - `memoize` - per-argument result caching
//! - `curry` / `curry3` / `uncurry` - arity splitting
//! - `flip`, `compose`, `pipe` - argument and function reordering

mod compose;
mod curry;
mod memoize;

pub use compose::{compose, compose_all, flip, identity, pipe, pipe_all, Endo};
pub use curry::{curry, curry3, uncurry, Curried};
pub use memoize::{memoize, Memoized};
