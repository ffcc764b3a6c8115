//! AssetRender - manifest-driven template rendering
//!
//! Renders HTML fragments (script and stylesheet includes) from Handlebars
//! templates, resolving every asset reference through a JSON manifest that an
//! earlier build stage produced (`{"js/site.js": "js/site.a1b2c3.js"}`).
//!
//! # Template syntax
//!
//! ```text
//! <script src="{{assetPath "js/site.js"}}"></script>
//! ```
//!
//! renders to `<script src="/site_media/static/js/site.a1b2c3.js"></script>`
//! with a static URL root of `/site_media/static`.
//!
//! # Example
//!
//! ```ignore
//! use assetrender::{Renderer, write_rendered};
//!
//! let renderer = Renderer::new("/site_media/static");
//! let files = renderer.render("static/_build/manifest.json", "static/src/hbs/*.hbs")?;
//! write_rendered(&files, "wem/templates")?;
//! ```

pub mod cli;
pub mod config;
mod error;
mod helper;
mod manifest;
mod output;
mod renderer;

pub use error::{AssetError, ErrorKind};
pub use helper::{AssetPathHelper, MissingAsset, asset_url};
pub use manifest::Manifest;
pub use output::write_rendered;
pub use renderer::{RenderedFile, Renderer, output_file_name};

/// Name templates use to call the asset path helper
pub const ASSET_PATH_HELPER: &str = "assetPath";

/// Static URL root used when none is configured
pub const DEFAULT_STATIC_URL_ROOT: &str = "/site_media/static";

/// Extension given to rendered output files
pub const OUTPUT_EXTENSION: &str = "html";

/// Marker rendered in place of a value missing from the manifest
pub const MISSING_VALUE_MARKER: &str = "undefined";
