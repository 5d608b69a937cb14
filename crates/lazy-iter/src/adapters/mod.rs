/**
 * @file mod.rs
 * @author Krisna Pranav
 * @brief mod
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */

mod cloned;
mod enumerate;
mod filter;
mod fuse;
mod inspect;
mod map;
mod skip;
mod take;
mod zip;

pub use cloned::Cloned;
pub use enumerate::Enumerate;
pub use filter::Filter;
pub use fuse::Fuse;
pub use inspect::Inspect;
pub use map::Map;
pub use skip::{Skip, SkipWhile};
pub use take::{Take, TakeWhile};
pub use zip::Zip;
