use thiserror::Error;

/// Result of a store mutation.
///
/// No mutation is an error. A caller that needs to know whether anything
/// happened checks the outcome instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The state changed.
    Applied,
    /// The request was valid but there was nothing to do.
    Unchanged,
    /// The request was refused; the state is untouched.
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Unchanged => "unchanged",
            Self::Rejected(_) => "rejected",
        }
    }
}

/// Why a mutation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Quantity must be at least 1 (got {quantity})")]
    QuantityBelowMinimum { quantity: i64 },

    #[error("Quantity must be at most {max} (got {quantity})")]
    QuantityAboveMaximum { quantity: i64, max: u32 },

    #[error("Product '{product_id}' not found")]
    ProductNotFound { product_id: String },

    #[error("Admin access requires an identifier containing 'admin' (got '{identifier}')")]
    AdminAccessDenied { identifier: String },

    #[error("Operation '{operation}' requires an admin")]
    Unauthorized { operation: &'static str },
}

impl Rejection {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::QuantityBelowMinimum { .. } => "quantity_below_minimum",
            Self::QuantityAboveMaximum { .. } => "quantity_above_maximum",
            Self::ProductNotFound { .. } => "product_not_found",
            Self::AdminAccessDenied { .. } => "admin_access_denied",
            Self::Unauthorized { .. } => "unauthorized",
        }
    }
}
