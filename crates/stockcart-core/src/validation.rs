//! # Validation Module
//!
//! Boundary checks run before a cart operation touches any state.
//!
//! ## Usage
//! ```rust
//! use stockcart_core::validation::validate_quantity;
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a quantity passed to `add_item` or `remove_item`.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ```text
/// add_item(id, qty)
///      │
///      ▼
/// validate_quantity(qty) ← THIS FUNCTION
///      │
///      ├── qty <= 0? → MustBePositive
///      │
///      └── OK → consult the store
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a line quantity against an optional per-line limit.
pub fn validate_line_quantity(qty: i64, max: Option<i64>) -> ValidationResult<()> {
    match max {
        Some(max) if qty > max => Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max,
        }),
        _ => Ok(()),
    }
}

/// Validates that a cart with `current_lines` distinct products may take one more.
pub fn validate_line_count(current_lines: usize, max: Option<usize>) -> ValidationResult<()> {
    match max {
        Some(max) if current_lines >= max => Err(ValidationError::OutOfRange {
            field: "cart lines".to_string(),
            min: 0,
            max: i64::try_from(max).unwrap_or(i64::MAX),
        }),
        _ => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
