// SPDX-License-Identifier: MPL-2.0
pub mod resizable;

pub use resizable::{resizable, Resizable};
