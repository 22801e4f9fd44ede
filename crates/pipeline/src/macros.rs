//! Macros for building pipeline values with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`nonempty!`]: Build a [`NonEmpty`](crate::NonEmpty) list, like `vec!`
//! - [`chain!`]: Thread a value through several steps

// ============================================================================
// NONEMPTY MACRO
// ============================================================================

/// Builds a [`NonEmpty`](crate::NonEmpty) list from one or more elements.
///
/// An empty invocation does not compile.
///
/// ```rust,ignore
/// let errors = nonempty!["String is not length 5".to_string()];
/// let many = nonempty![1, 2, 3];
/// ```
#[macro_export]
macro_rules! nonempty {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::NonEmpty::new($head)$(.with_tail($tail))*
    };
}

// ============================================================================
// CHAIN MACRO
// ============================================================================

/// Starts a pipeline and chains every step in order.
///
/// ```rust,ignore
/// let verdict = chain!("100".to_string() => &string_to_int, &less_than_ten).value();
/// // same as
/// let verdict = start("100".to_string()).then(&string_to_int).then(&less_than_ten).value();
/// ```
#[macro_export]
macro_rules! chain {
    ($value:expr => $($step:expr),+ $(,)?) => {
        $crate::start($value)$(.then($step))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
