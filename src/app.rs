//! Command-line application state
//!
//! Holds the configuration, the preset catalog, the parser and the optional
//! derivation cache, and turns one request into a text report.

use std::path::PathBuf;
use std::sync::Arc;

use geoview_core::{
    derive, Catalog, CatalogError, DerivationCache, DerivedShape, ShapeDisplay, ShapeParams,
};
use geoview_parse::{ParseError, ParsedShape, Parser};

use crate::config::{AppConfig, ConfigError, GeometryConfig};
use crate::report::{describe_ambiguities, describe_net, describe_params, TextReport};

pub const USAGE: &str = "\
Usage: geoview [--config DIR] [--preset NAME | --list | DESCRIPTION...]

  --config DIR    read default.toml and user.toml from DIR (default: config)
  --preset NAME   show a named preset
  --list          list preset names
  DESCRIPTION     free text such as \"cylinder with radius 2 and height 4\"";

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// The configured default preset
    Default,
    Preset(String),
    Description(String),
    ListPresets,
    Help,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub config_dir: Option<PathBuf>,
    pub request: Request,
}

impl Cli {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config_dir = None;
        let mut preset = None;
        let mut list = false;
        let mut words = Vec::new();

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    return Ok(Self { config_dir, request: Request::Help });
                }
                "--config" => {
                    let dir = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--config needs a directory".to_string()))?;
                    config_dir = Some(PathBuf::from(dir));
                }
                "--preset" => {
                    let name = args
                        .next()
                        .ok_or_else(|| AppError::Usage("--preset needs a name".to_string()))?;
                    preset = Some(name);
                }
                "--list" => list = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown option '{}'", flag)));
                }
                _ => words.push(arg),
            }
        }

        let request = match (preset, list, words.is_empty()) {
            (Some(_), _, false) | (Some(_), true, _) | (None, true, false) => {
                return Err(AppError::Usage(
                    "give only one of --preset, --list or a description".to_string(),
                ))
            }
            (Some(name), false, true) => Request::Preset(name),
            (None, true, true) => Request::ListPresets,
            (None, false, false) => Request::Description(words.join(" ")),
            (None, false, true) => Request::Default,
        };
        Ok(Self { config_dir, request })
    }
}

/// Main application state
pub struct App {
    config: AppConfig,
    catalog: Catalog,
    parser: Parser,
    cache: Option<DerivationCache>,
}

impl App {
    /// Build the application, merging the configured preset file if any
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let mut catalog = Catalog::builtin();
        if let Some(path) = &config.catalog.preset_file {
            let extra = Catalog::load(path)?;
            log::info!("Loaded {} presets from {}", extra.len(), path.display());
            catalog.merge(extra);
        }

        let parser = Parser::with_options(config.parser_options());
        let cache = config
            .cache
            .enabled
            .then(|| DerivationCache::with_capacity(config.cache.max_entries));

        Ok(Self { config, catalog, parser, cache })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cache(&self) -> Option<&DerivationCache> {
        self.cache.as_ref()
    }

    /// Derive a preset, with the configured tessellation applied
    pub fn preset(&mut self, name: &str) -> Result<Arc<DerivedShape>, AppError> {
        let params = self.catalog.get_preset(name)?;
        let params = apply_segments(params, &self.config.geometry);
        params.validate().map_err(|e| AppError::Catalog(CatalogError::Invalid {
            name: name.to_string(),
            source: e,
        }))?;
        Ok(self.derive(&params))
    }

    /// Parse and derive a free-text description
    pub fn describe(&mut self, text: &str) -> Result<(ParsedShape, Arc<DerivedShape>), AppError> {
        let parsed = self
            .parser
            .parse(text)
            .map_err(|error| AppError::Parse { input: text.to_string(), error })?;
        let shape = self.derive(&parsed.params);
        Ok((parsed, shape))
    }

    fn derive(&mut self, params: &ShapeParams) -> Arc<DerivedShape> {
        match &mut self.cache {
            Some(cache) => cache.get_or_derive(params),
            None => Arc::new(derive(params)),
        }
    }

    /// Answer one request with a printable report
    pub fn run(&mut self, request: &Request) -> Result<String, AppError> {
        match request {
            Request::Help => Ok(USAGE.to_string()),
            Request::ListPresets => Ok(self.catalog.names().collect::<Vec<_>>().join("\n")),
            Request::Default => {
                let name = self.config.catalog.default_preset.clone();
                let shape = self.preset(&name)?;
                Ok(report(&shape, None))
            }
            Request::Preset(name) => {
                let shape = self.preset(name)?;
                Ok(report(&shape, None))
            }
            Request::Description(text) => {
                let (parsed, shape) = self.describe(text)?;
                Ok(report(&shape, Some(&parsed)))
            }
        }
    }
}

/// Full text report of a derived shape
pub fn report(shape: &DerivedShape, parsed: Option<&ParsedShape>) -> String {
    let mut out = describe_params(&shape.params, parsed);
    if let Some(parsed) = parsed {
        out.push_str(&describe_ambiguities(parsed));
    }
    out.push_str(&TextReport::default().display(&shape.geometry, &shape.metrics));
    out.push_str(&describe_net(&shape.net));
    out
}

/// Replace a curved preset's tessellation with the configured counts
fn apply_segments(params: ShapeParams, geometry: &GeometryConfig) -> ShapeParams {
    match params {
        ShapeParams::Cylinder { radius, height, .. } => ShapeParams::Cylinder {
            radius,
            height,
            radial_segments: geometry.radial_segments,
        },
        ShapeParams::Cone { radius, height, .. } => ShapeParams::Cone {
            radius,
            height,
            radial_segments: geometry.radial_segments,
        },
        ShapeParams::Sphere { radius, .. } => ShapeParams::Sphere {
            radius,
            width_segments: geometry.width_segments,
            height_segments: geometry.height_segments,
        },
        flat => flat,
    }
}

/// Application error
#[derive(Debug)]
pub enum AppError {
    /// Bad command line
    Usage(String),
    Config(ConfigError),
    Catalog(CatalogError),
    Parse {
        input: String,
        error: ParseError,
    },
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            AppError::Config(_) => 3,
            AppError::Catalog(_) => 4,
            AppError::Parse { .. } => 1,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        AppError::Catalog(e)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Usage(msg) => write!(f, "{}\n\n{}", msg, USAGE),
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Catalog(e) => write!(f, "{}", e),
            AppError::Parse { input, error } => {
                write!(f, "Could not read '{}': {}\n{}", input, error, error.hint())
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Usage(_) => None,
            AppError::Config(e) => Some(e),
            AppError::Catalog(e) => Some(e),
            AppError::Parse { error, .. } => Some(error),
        }
    }
}
