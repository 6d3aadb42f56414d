//! Error macros for tagpath

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::TagpathError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::TagpathError::UsageError($msg.to_string()))
    };
}

/// Macro for creating malformed-record errors
#[macro_export]
macro_rules! bail_malformed {
    ($index:expr, $field:expr, $reason:expr) => {
        return Err($crate::error::TagpathError::malformed(
            $index, $field, $reason,
        ))
    };
}
