//! The `assetPath` template helper

use std::sync::Arc;

use clap::ValueEnum;
use handlebars::{
    Context, Handlebars, Helper, HelperDef, RenderContext, RenderError, RenderErrorReason, ScopedJson,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::manifest::Manifest;
use crate::{ASSET_PATH_HELPER, MISSING_VALUE_MARKER};

/// What `assetPath` renders when a key is absent from the manifest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingAsset {
    /// Render `<root>/undefined` and log a warning
    #[default]
    Placeholder,
    /// Render `<root>/` and log a warning
    Empty,
    /// Fail the render
    Error,
}

impl std::fmt::Display for MissingAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Placeholder => "placeholder",
            Self::Empty => "empty",
            Self::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// Join the static URL root and a resolved asset path
///
/// No slash normalisation happens here: `("/static/", "a.js")` gives
/// `/static//a.js`.
pub fn asset_url(static_url_root: &str, value: &str) -> String {
    [static_url_root, value].join("/")
}

/// Helper resolving an asset key through the manifest it was built with
pub struct AssetPathHelper {
    manifest: Arc<Manifest>,
    static_url_root: String,
    missing: MissingAsset,
}

impl AssetPathHelper {
    pub fn new(manifest: Arc<Manifest>, static_url_root: impl Into<String>, missing: MissingAsset) -> Self {
        Self {
            manifest,
            static_url_root: static_url_root.into(),
            missing,
        }
    }

    /// Resolve a key to its full URL, applying the missing-asset policy
    pub fn resolve(&self, key: &str) -> Result<String, RenderError> {
        if let Some(value) = self.manifest.get(key) {
            debug!("AssetPathHelper::resolve: {} -> {}", key, value);
            return Ok(asset_url(&self.static_url_root, value));
        }

        match self.missing {
            MissingAsset::Placeholder => {
                warn!("Asset '{}' not found in manifest, rendering placeholder", key);
                Ok(asset_url(&self.static_url_root, MISSING_VALUE_MARKER))
            }
            MissingAsset::Empty => {
                warn!("Asset '{}' not found in manifest, rendering empty path", key);
                Ok(asset_url(&self.static_url_root, ""))
            }
            MissingAsset::Error => Err(RenderErrorReason::Other(format!("asset '{}' not found in manifest", key)).into()),
        }
    }
}

impl HelperDef for AssetPathHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        if h.params().len() > 1 {
            return Err(RenderErrorReason::Other(format!(
                "{} takes exactly one argument, got {}",
                ASSET_PATH_HELPER,
                h.params().len()
            ))
            .into());
        }

        let param = h
            .param(0)
            .ok_or(RenderErrorReason::ParamNotFoundForIndex(ASSET_PATH_HELPER, 0))?;
        let key = param.value().as_str().ok_or_else(|| {
            RenderErrorReason::Other(format!(
                "{} expects a string key, got {}",
                ASSET_PATH_HELPER,
                param.value()
            ))
        })?;

        Ok(ScopedJson::Derived(Value::String(self.resolve(key)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn helper(missing: MissingAsset) -> AssetPathHelper {
        let manifest: Manifest = [("a".to_string(), "a.min.js".to_string())].into_iter().collect();
        AssetPathHelper::new(Arc::new(manifest), "/static", missing)
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url("/static", "a.min.js"), "/static/a.min.js");
        assert_eq!(asset_url("/static/", "a.min.js"), "/static//a.min.js");
        assert_eq!(asset_url("", "a.min.js"), "/a.min.js");
    }

    #[test]
    fn test_resolve_present_key() {
        for policy in [MissingAsset::Placeholder, MissingAsset::Empty, MissingAsset::Error] {
            assert_eq!(helper(policy).resolve("a").unwrap(), "/static/a.min.js");
        }
    }

    #[test]
    fn test_resolve_missing_key() {
        assert_eq!(
            helper(MissingAsset::Placeholder).resolve("b").unwrap(),
            "/static/undefined"
        );
        assert_eq!(helper(MissingAsset::Empty).resolve("b").unwrap(), "/static/");

        let err = helper(MissingAsset::Error).resolve("b").unwrap_err();
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn test_missing_asset_display_matches_serde() {
        for policy in [MissingAsset::Placeholder, MissingAsset::Empty, MissingAsset::Error] {
            let yaml = serde_yaml::to_string(&policy).unwrap();
            assert_eq!(yaml.trim(), policy.to_string());
        }
    }

    proptest! {
        #[test]
        fn asset_url_keeps_both_parts(root in "[a-z/_]{0,12}", value in "[a-z0-9./]{0,20}") {
            let url = asset_url(&root, &value);
            prop_assert!(url.starts_with(&root));
            prop_assert!(url.ends_with(&value));
            prop_assert_eq!(url.len(), root.len() + 1 + value.len());
        }
    }
}
