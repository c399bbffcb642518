//! YAML parsing capability.
//!
//! Workflow verification and config overrides need a YAML parser, which
//! is an optional capability behind the `yaml` cargo feature (enabled by
//! default). When compiled out, [`supported`] reports `false` and the
//! workflows check degrades to a single warning outcome instead of
//! per-file results.

/// Hint shown when YAML support is compiled out.
pub const INSTALL_HINT: &str =
    "YAML support is not compiled in; rebuild with the `yaml` feature to verify workflows";

/// Whether YAML parsing is available in this build.
pub fn supported() -> bool {
    cfg!(feature = "yaml")
}

/// Parse a YAML document, surfacing the parser's message on failure.
#[cfg(feature = "yaml")]
pub fn parse(text: &str) -> Result<serde_yaml::Value, String> {
    serde_yaml::from_str(text).map_err(|e| e.to_string())
}

/// Stub that always fails; callers are expected to consult [`supported`]
/// first and short-circuit.
#[cfg(not(feature = "yaml"))]
pub fn parse(_text: &str) -> Result<(), String> {
    Err(INSTALL_HINT.to_string())
}
