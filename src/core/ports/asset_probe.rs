//! Asset probe port
//!
//! Reports whether an asset path currently resolves to a usable file.
//! Dictionary files may reference assets that were since deleted, so
//! every candidate path is probed before it is trusted.

/// Existence check for asset paths
///
/// Each call may hit storage, so hosts running resolution on an async
/// runtime should treat it as blocking I/O.
pub trait AssetProbe {
    /// Whether `path` names an asset that can be rendered
    fn exists(&self, path: &str) -> bool;
}

impl<F> AssetProbe for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}
