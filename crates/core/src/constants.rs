/// Base currency assumed when a user has not chosen one
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
