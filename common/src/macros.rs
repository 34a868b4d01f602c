//! Helper macros.
//!

/// Create a `PathBuf` out of any number of path components.
///
#[macro_export]
macro_rules! makepath {
    ($($item:expr),+) => {
        [$(::std::path::PathBuf::from($item),)+]
            .iter()
            .collect::<::std::path::PathBuf>()
    };
}
