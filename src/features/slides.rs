//! Slide catalogue
//!
//! Built-in hero slides, optionally replaced by a `slides.json` file in the
//! config directory.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::carousel::Slide;

/// The hero slides shipped with the application
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            1,
            "discover",
            "https://images.unsplash.com/photo-1519677584237-752f8853252e?auto=format&fit=crop&q=80&w=1920",
        ),
        Slide::new(
            2,
            "special",
            "https://images.unsplash.com/photo-1472851294608-062f824d29cc?auto=format&fit=crop&q=80&w=1920",
        ),
        Slide::new(
            3,
            "community",
            "https://images.unsplash.com/photo-1559925393-8be0ec4767c8?auto=format&fit=crop&q=80&w=1920",
        ),
        Slide::new(
            4,
            "explore",
            "https://images.unsplash.com/photo-1572584642822-6f8de0243c93?q=80&w=1919",
        ),
        Slide::new(
            5,
            "adventure",
            "https://plus.unsplash.com/premium_photo-1661883237884-263e8de8869b?fm=jpg&q=60&w=3000",
        ),
    ]
}

/// Path of the optional slide override file
pub fn file_path() -> Option<PathBuf> {
    super::settings::config_dir().map(|dir| dir.join("slides.json"))
}

/// Load the slide override, falling back to the built-in slides
pub fn load() -> Vec<Slide> {
    let Some(path) = file_path().filter(|p| p.exists()) else {
        return default_slides();
    };

    match load_from_file(&path) {
        Ok(slides) => {
            info!("Loaded {} slides from {:?}", slides.len(), path);
            slides
        }
        Err(e) => {
            warn!("Ignoring slide file {:?}: {}", path, e);
            default_slides()
        }
    }
}

/// Load slides from a specific file; an empty list is an error
pub fn load_from_file(path: &Path) -> Result<Vec<Slide>, SlidesError> {
    let content = std::fs::read_to_string(path).map_err(|e| SlidesError::Io(e.to_string()))?;
    let slides: Vec<Slide> =
        serde_json::from_str(&content).map_err(|e| SlidesError::Parse(e.to_string()))?;
    if slides.is_empty() {
        return Err(SlidesError::Empty);
    }
    Ok(slides)
}

/// Errors that can occur loading slides
#[derive(Debug, Clone)]
pub enum SlidesError {
    Io(String),
    Parse(String),
    Empty,
}

impl std::fmt::Display for SlidesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlidesError::Io(e) => write!(f, "IO error: {}", e),
            SlidesError::Parse(e) => write!(f, "Parse error: {}", e),
            SlidesError::Empty => write!(f, "slide list is empty"),
        }
    }
}

impl std::error::Error for SlidesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_slides_have_unique_ids() {
        let slides = default_slides();
        assert_eq!(slides.len(), 5);
        let mut ids: Vec<u64> = slides.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn load_from_file_reads_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.json");
        std::fs::write(
            &path,
            r#"[{"id": 9, "display_key": "special", "image_ref": "https://a/b.png"}]"#,
        )
        .unwrap();

        let slides = load_from_file(&path).unwrap();
        assert_eq!(slides, vec![Slide::new(9, "special", "https://a/b.png")]);
    }

    #[test]
    fn empty_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(matches!(load_from_file(&path), Err(SlidesError::Empty)));
    }

    #[test]
    fn malformed_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_from_file(&path), Err(SlidesError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(SlidesError::Io(_))));
    }
}
