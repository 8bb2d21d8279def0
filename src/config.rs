use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::grouping::DEFAULT_GROUP_THRESHOLD;

/// Which view the rendered markup is meant for.
/// Both views share the same rendering algorithm and differ only in classes.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Public blog detail page
    #[default]
    Detail,
    /// Admin editor live preview
    Preview,
}

/// What to emit for a placeholder whose image cannot be resolved.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MissingImagePolicy {
    /// A visible "missing image" block naming the file
    #[default]
    Placeholder,
    /// Leave the `[IMAGE:name]` token in the text
    Literal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the blog backend
    pub api_base: String,
    /// Path under `api_base` where uploaded blog images are served
    pub uploads_path: String,
    pub group_threshold: usize,
    pub grid_columns: usize,
    pub missing_images: MissingImagePolicy,
    pub style: Style,
    /// HTML-escape prose before emitting it. Off by default: content is
    /// trusted markup unless this is set.
    pub escape_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000".to_string(),
            uploads_path: "/api/uploads/blog-images".to_string(),
            group_threshold: DEFAULT_GROUP_THRESHOLD,
            grid_columns: 2,
            missing_images: MissingImagePolicy::Placeholder,
            style: Style::Detail,
            escape_text: false,
        }
    }
}

impl Config {
    /// URL prefix for uploaded images, without a trailing slash.
    pub fn uploads_url(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = self.uploads_path.trim_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.config.api_base = base.into();
        self
    }

    pub fn uploads_path(mut self, path: impl Into<String>) -> Self {
        self.config.uploads_path = path.into();
        self
    }

    pub fn group_threshold(mut self, threshold: usize) -> Self {
        self.config.group_threshold = threshold;
        self
    }

    pub fn grid_columns(mut self, columns: usize) -> Self {
        self.config.grid_columns = columns.max(1);
        self
    }

    pub fn missing_images(mut self, policy: MissingImagePolicy) -> Self {
        self.config.missing_images = policy;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.config.style = style;
        self
    }

    pub fn escape_text(mut self, escape: bool) -> Self {
        self.config.escape_text = escape;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".safari-blog.toml", "safari-blog.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("safari-blog").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("safari-blog")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .safari-blog.toml, safari-blog.toml
/// 3) XDG: $XDG_CONFIG_HOME/safari-blog/config.toml or ~/.config/safari-blog/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
