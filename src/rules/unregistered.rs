//! Unregistered key detection rule.
//!
//! Detects keys that exist in the reference locale but are not listed in the
//! key registry. Registry keys that the reference does not use are fine.

use anyhow::{Context, Result};

use crate::{
    core::{BuildContext, KeyRegistry, LocaleDocument},
    issues::UnregisteredKeyIssue,
};

pub fn check_unregistered_keys_issues(ctx: &BuildContext) -> Result<Vec<UnregisteredKeyIssue>> {
    let registry = ctx.load_registry()?;
    let reference =
        LocaleDocument::load(&ctx.paths.reference, ctx.strings_field()).with_context(|| {
            format!(
                "Failed to load reference locale: {}",
                ctx.paths.reference.display()
            )
        })?;

    Ok(check_unregistered_keys(&registry, &reference))
}

/// Keys in `reference` that `registry` does not contain, sorted.
pub fn check_unregistered_keys(
    registry: &KeyRegistry,
    reference: &LocaleDocument,
) -> Vec<UnregisteredKeyIssue> {
    let mut issues: Vec<UnregisteredKeyIssue> = reference
        .keys()
        .filter(|key| !registry.contains(key))
        .map(|key| UnregisteredKeyIssue { key: key.clone() })
        .collect();

    issues.sort();
    issues
}
