// Fixed configuration of the one toolchain invocation this tool performs,
// plus the constants reported to the prover.

use std::path::PathBuf;

/// Recommended list of flags to use to compile Solana projects.
pub const RUSTFLAGS: &str = "-C llvm-args=--sbf-expand-memcpy-in-order \
    -C llvm-args=--combiner-store-merging=false \
    -C llvm-args=--combiner-load-merging=false \
    -C llvm-args=--aggressive-instcombine-max-scan-instrs=0 \
    -C llvm-args=--combiner-reduce-load-op-store-width=false \
    -C llvm-args=--combiner-shrink-load-replace-store-with-store=false \
    -C strip=none -C debuginfo=2";

pub const BUILD_PROGRAM: &str = "cargo";
pub const BUILD_ARGS: &[&str] = &["+solana", "build-sbf", "--features", "certora"];

/// Extra features requested on the command line reach cargo through this
/// variable, space-joined.
pub const CARGO_FEATURES_ENV: &str = "CARGO_FEATURES";

/// Source glob patterns the prover should pick up.
pub const SOURCES: &[&str] = &["src/**/*.rs"];

/// Artifact the build is expected to produce, relative to the project dir.
pub const EXECUTABLES: &str = "../../target/sbf-solana-solana/release/vault_application.so";

/// Outcome of one toolchain invocation.
///
/// The log paths are `Some` only when the child's output was redirected to
/// files. Those files are deliberately left on disk so a failed build stays
/// diagnosable after this process exits.
#[derive(Debug)]
pub struct BuildResult {
    pub stdout_log: Option<PathBuf>,
    pub stderr_log: Option<PathBuf>,
    pub exit_code: i32,
}

impl BuildResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
