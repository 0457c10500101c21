use serde::Serialize;

mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[derive(Copy, Clone, Debug, Serialize)]
pub struct ApplicationMetadata {
    pub version: &'static str,
    pub git_version: &'static str,
    pub git_dirty: bool,
    pub rust_version: &'static str,
    pub profile: &'static str,
}

impl ApplicationMetadata {
    /// Metadata of the running generator, captured at build time.
    pub fn new() -> Self {
        Self {
            version: build_info::PKG_VERSION,
            git_version: build_info::GIT_VERSION.unwrap_or("Unspecified"),
            git_dirty: build_info::GIT_DIRTY.unwrap_or(false),
            rust_version: build_info::RUSTC_VERSION,
            profile: build_info::PROFILE,
        }
    }
}

impl Default for ApplicationMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_version() {
        let meta = ApplicationMetadata::new();
        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!meta.rust_version.is_empty());
    }
}
