#![cfg(test)]
pub use rstest::*;
pub use tempfile::TempDir;

pub fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Fresh scratch directory under the system temp dir. It is removed when the
/// returned guard is dropped, so keep it alive for the whole test.
pub fn scratch_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("prequel_test_")
        .tempdir()
        .expect("Failed to create scratch directory")
}

mod scratch_dir_tests {
    use super::*;

    #[test]
    fn scratch_dirs_are_unique_and_exist() {
        let a = scratch_dir();
        let b = scratch_dir();
        assert_ne!(a.path(), b.path());
        assert!(a.path().is_dir() && b.path().is_dir());
    }

    #[test]
    fn scratch_dir_is_removed_on_drop() {
        let dir = scratch_dir();
        let path = dir.path().to_path_buf();
        std::fs::write(path.join("draft.sql"), "select 1;").expect("write");
        drop(dir);
        assert!(!path.exists());
    }
}
