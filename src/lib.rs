//! Value versus reference passing, one function per rule.
//!
//! | Module | Argument | Caller sees the change? |
//! |---|---|---|
//! | [`scalar`] | `T` / `T` returned as `(T, T)` / `&mut T` | no / after reassigning / yes |
//! | [`sequence`] | `&mut [T]` | yes |
//! | [`mapping`] | `&mut HashMap<K, V>` | yes |
//! | [`record`] | `Player` / `&mut Player` | no / yes |
//! | [`pointer`] | `Option<&mut T>` | yes, while bound |

pub mod config;
pub mod demo;
pub mod error;
pub mod mapping;
pub mod pointer;
pub mod record;
pub mod scalar;
pub mod sequence;

pub use config::Scenario;
pub use demo::{run, run_demo, Demo, Narrator};
pub use error::{DemoError, Result};
pub use mapping::{swap_entries, try_swap_entries};
pub use pointer::{address_of, Pointer, UNBOUND};
pub use record::{level_up_by_reference, level_up_by_value, Player};
pub use scalar::{swap_by_reference, swap_by_reference_with_temp, swap_by_return, swap_by_value};
pub use sequence::swap_first_two;
