//! Manifest template renderer

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use handlebars::Handlebars;
use log::{debug, info};

use crate::error::AssetError;
use crate::helper::{AssetPathHelper, MissingAsset};
use crate::manifest::Manifest;
use crate::{ASSET_PATH_HELPER, OUTPUT_EXTENSION};

/// A rendered template ready for a downstream write step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Template the contents were rendered from
    pub source: PathBuf,
    /// Output file name (`_scripts.hbs` -> `_scripts.html`)
    pub file_name: String,
    /// Rendered markup
    pub contents: String,
}

/// Derive the output file name for a template
///
/// Takes the template's base name and replaces its extension with `.html`,
/// appending one when the template has none.
pub fn output_file_name(template: impl AsRef<Path>) -> String {
    let base = template.as_ref().file_name().map(PathBuf::from).unwrap_or_default();
    base.with_extension(OUTPUT_EXTENSION).to_string_lossy().into_owned()
}

/// Renders templates against an asset manifest
///
/// Holds no state between calls; every `render` re-reads the manifest.
#[derive(Debug, Clone)]
pub struct Renderer {
    static_url_root: String,
    missing: MissingAsset,
}

impl Renderer {
    /// Create a renderer serving assets under the given URL root
    pub fn new(static_url_root: impl Into<String>) -> Self {
        Self {
            static_url_root: static_url_root.into(),
            missing: MissingAsset::default(),
        }
    }

    /// Set the behavior for asset keys missing from the manifest
    pub fn with_missing_asset(mut self, missing: MissingAsset) -> Self {
        self.missing = missing;
        self
    }

    pub fn static_url_root(&self) -> &str {
        &self.static_url_root
    }

    pub fn missing_asset(&self) -> MissingAsset {
        self.missing
    }

    /// Render every template matched by `templates` against the manifest at `manifest_path`
    ///
    /// `templates` is a file path or a glob pattern. Matches are rendered in
    /// sorted path order. Either every template renders or nothing is returned.
    pub fn render(
        &self,
        manifest_path: impl AsRef<Path>,
        templates: impl AsRef<Path>,
    ) -> Result<Vec<RenderedFile>, AssetError> {
        let manifest = Arc::new(Manifest::load(manifest_path)?);
        let paths = resolve_templates(templates.as_ref())?;
        let hbs = self.engine(Arc::clone(&manifest));

        paths
            .iter()
            .map(|path| {
                let source = fs::read_to_string(path).map_err(|source| AssetError::TemplateRead {
                    path: path.clone(),
                    source,
                })?;
                render_with(&hbs, &manifest, path, &source)
            })
            .collect()
    }

    /// Render template source that is already in memory
    pub fn render_source(
        &self,
        manifest: Manifest,
        template: impl AsRef<Path>,
        source: &str,
    ) -> Result<RenderedFile, AssetError> {
        let manifest = Arc::new(manifest);
        let hbs = self.engine(Arc::clone(&manifest));
        render_with(&hbs, &manifest, template.as_ref(), source)
    }

    fn engine(&self, manifest: Arc<Manifest>) -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(self.missing == MissingAsset::Error);
        hbs.register_helper(
            ASSET_PATH_HELPER,
            Box::new(AssetPathHelper::new(manifest, self.static_url_root.clone(), self.missing)),
        );
        hbs
    }
}

fn render_with(
    hbs: &Handlebars<'static>,
    manifest: &Manifest,
    path: &Path,
    source: &str,
) -> Result<RenderedFile, AssetError> {
    let file_name = output_file_name(path);
    info!("Rendering {} -> {}", path.display(), file_name);

    let contents = hbs
        .render_template(source, manifest)
        .map_err(|source| AssetError::TemplateRender {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(RenderedFile {
        source: path.to_path_buf(),
        file_name,
        contents,
    })
}

fn is_pattern(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Expand a template path or glob into the files to render
fn resolve_templates(templates: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let pattern = templates.to_string_lossy();
    if !is_pattern(&pattern) {
        debug!("resolve_templates: literal path {}", templates.display());
        return Ok(vec![templates.to_path_buf()]);
    }

    let entries = glob::glob(&pattern).map_err(|source| AssetError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| AssetError::TemplateRead {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(AssetError::NoTemplates(pattern.to_string()));
    }

    paths.sort();
    debug!("resolve_templates: {} matches for {}", paths.len(), pattern);
    Ok(paths)
}
