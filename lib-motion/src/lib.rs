#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

use cfg_if::cfg_if;
use math::*;

pub mod sample;
pub use sample::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod classifier;
pub use classifier::*;

pub mod detection;
pub use detection::*;

pub mod metrics;
pub use metrics::*;

cfg_if! { if #[cfg(feature = "std")] {
    pub mod worker;
    pub use worker::*;
}}

#[cfg(test)]
mod tests;
