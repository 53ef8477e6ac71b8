//! Error macros for pathtrace

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathtraceError::invalid_value($context, $value))
    };
}

/// Macro for creating invalid graph errors
#[macro_export]
macro_rules! bail_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::PathtraceError::invalid_graph(format!($($arg)*)))
    };
}
