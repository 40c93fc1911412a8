//! Error macros for grapho

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphoError::invalid_value($context, $value))
    };
}

/// Macro for creating unknown algorithm errors
#[macro_export]
macro_rules! bail_unknown_algorithm {
    ($kind:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::GraphoError::unknown_algorithm(
            $kind, $value, $supported,
        ))
    };
}
