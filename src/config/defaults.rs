// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Box**: Initial size of a resizable box
//! - **Stepping**: Quantization unit and snapping tolerance
//! - **Handle**: Draggable region thickness

// ==========================================================================
// Box Defaults
// ==========================================================================

/// Initial width of a resizable box.
pub const DEFAULT_BOX_WIDTH: f32 = 250.0;

/// Initial height of a resizable box.
pub const DEFAULT_BOX_HEIGHT: f32 = 50.0;

// ==========================================================================
// Stepping Defaults
// ==========================================================================

/// Default quantization unit (1 = continuous resizing).
pub const DEFAULT_STEP: f32 = 1.0;

/// Default tolerance around the bounds and for step remainders.
pub const DEFAULT_STEPPING_MARGIN: f32 = 20.0;

// ==========================================================================
// Handle Defaults
// ==========================================================================

/// Default thickness of the draggable handle region.
pub const DEFAULT_CURSOR_MARGIN: f32 = 10.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_BOX_WIDTH > 0.0);
    assert!(DEFAULT_BOX_HEIGHT > 0.0);
    assert!(DEFAULT_STEP >= 1.0);
    assert!(DEFAULT_STEPPING_MARGIN >= 0.0);
    assert!(DEFAULT_CURSOR_MARGIN > 0.0);
};
