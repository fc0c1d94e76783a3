#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes, dead_code)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Commit shown in the sidebar footer. CI can pin it with `WIGELL_WEB_GIT_SHA`
/// when the build runs outside a git checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("WIGELL_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => built_info::GIT_COMMIT_HASH_SHORT.unwrap_or("unknown"),
    }
}

pub fn version() -> &'static str {
    built_info::PKG_VERSION
}

#[cfg(test)]
mod tests {
    #[test]
    fn build_metadata_is_never_empty() {
        assert!(!super::git_commit_hash().is_empty());
        assert!(!super::version().is_empty());
    }
}
