//! Page word lists loaded from JSON
//!
//! The input is the per-page output of a bbox text extractor:
//! page number, page size, an optional crop box and the word boxes.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::geometry::{PixelRect, Word};

/// Word texts that carry no ink and are never selectable
const BLANK_WORDS: [&str; 2] = [" ", "\u{2003}"];

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid page JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read image size of {path}: {detail}")]
    Image { path: PathBuf, detail: String },
}

/// Raw page layout as stored on disk
#[derive(Debug, Clone, Deserialize)]
pub struct PageLayout {
    #[serde(default, rename = "page")]
    pub page_num: usize,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// `[x0, y0, x1, y1]` of the visible part of the media box
    #[serde(default)]
    pub crop_box: Option<[f64; 4]>,
    #[serde(rename = "data")]
    pub words: Vec<Word>,
}

/// A page ready for selection: words in crop-box space with blank words
/// removed. Off-page words are only dropped by `visible_words`, once the
/// final coordinate space is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub page_num: usize,
    pub width: f64,
    pub height: f64,
    pub words: Vec<Word>,
}

impl Page {
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let content = fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let page = Self::from_json(&content)?;
        info!(
            "Loaded page {} from {path:?}: {}x{}, {} words",
            page.page_num,
            page.width,
            page.height,
            page.words.len()
        );
        Ok(page)
    }

    pub fn from_json(content: &str) -> Result<Self, PageError> {
        let layout: PageLayout = serde_json::from_str(content)?;
        Ok(Self::from_layout(layout))
    }

    pub fn from_layout(mut layout: PageLayout) -> Self {
        if let Some(crop) = layout.crop_box {
            transform_to_crop_box_space(&mut layout, crop);
        }

        let total = layout.words.len();
        let words: Vec<Word> = layout
            .words
            .into_iter()
            .filter(|w| !BLANK_WORDS.contains(&w.text.as_str()))
            .collect();
        if words.len() != total {
            debug!("Dropped {} blank words", total - words.len());
        }

        Self {
            page_num: layout.page_num,
            width: layout.width,
            height: layout.height,
            words,
        }
    }

    /// Use the background image's pixel size as the coordinate space
    pub fn with_image_size(mut self, (width, height): (f64, f64)) -> Self {
        debug!(
            "Page size {}x{} overridden by image size {width}x{height}",
            self.width, self.height
        );
        self.width = width;
        self.height = height;
        self
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn has_known_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Words touching the page bounds. A page without a size keeps all of
    /// its words.
    pub fn visible_words(&self) -> Vec<Word> {
        if !self.has_known_size() {
            return self.words.clone();
        }
        let bounds = self.bounds();
        let words: Vec<Word> = self
            .words
            .iter()
            .filter(|w| w.bounds().touches(&bounds))
            .cloned()
            .collect();
        if words.len() != self.words.len() {
            debug!("Dropped {} off-page words", self.words.len() - words.len());
        }
        words
    }
}

/// Pixel dimensions of an image file, read from its header only
pub fn probe_image_size(path: &Path) -> Result<(f64, f64), PageError> {
    let size = imagesize::size(path).map_err(|e| PageError::Image {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    Ok((size.width as f64, size.height as f64))
}

fn transform_to_crop_box_space(layout: &mut PageLayout, [x0, y0, x1, y1]: [f64; 4]) {
    layout.width = x1 - x0;
    layout.height = y1 - y0;
    for word in &mut layout.words {
        word.x -= x0;
        word.y -= y0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "page": 3,
        "width": 200,
        "height": 100,
        "fonts": [{"size": 12, "color": "221714"}],
        "data": [
            {"x": 10, "y": 10, "w": 40, "h": 12, "t": "Hello"},
            {"x": 55, "y": 10, "w": 4, "h": 12, "t": " "},
            {"x": 60, "y": 10, "w": 40.5, "h": 12.25, "t": "world"},
            {"x": 300, "y": 10, "w": 40, "h": 12, "t": "offpage"},
            {"x": 120, "y": 10, "w": 10, "h": 12, "t": " "}
        ]
    }"#;

    #[test]
    fn test_from_json_filters_blank_and_offpage_words() {
        let page = Page::from_json(SAMPLE).unwrap();

        assert_eq!(page.page_num, 3);
        assert_eq!(page.width, 200.0);
        assert_eq!(page.height, 100.0);
        assert_eq!(page.words.len(), 3);

        let visible = page.visible_words();
        let texts: Vec<&str> = visible.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", "world"]);
        assert_eq!(visible[1].w, 40.5);
    }

    #[test]
    fn test_words_without_text_are_kept() {
        let page = Page::from_json(
            r#"{"width": 50, "height": 50, "data": [{"x": 1, "y": 2, "w": 3, "h": 4}]}"#,
        )
        .unwrap();

        assert_eq!(page.page_num, 0);
        assert_eq!(page.words, vec![Word::new(1.0, 2.0, 3.0, 4.0)]);
    }

    #[test]
    fn test_zero_size_word_on_page_survives() {
        let page = Page::from_json(
            r#"{"width": 50, "height": 50, "data": [{"x": 50, "y": 50, "w": 0, "h": 0}]}"#,
        )
        .unwrap();

        assert_eq!(page.visible_words().len(), 1);
    }

    #[test]
    fn test_crop_box_translates_words() {
        let page = Page::from_json(
            r#"{
                "width": 612, "height": 792,
                "crop_box": [12, 20, 212, 120],
                "data": [
                    {"x": 22, "y": 30, "w": 10, "h": 10, "t": "in"},
                    {"x": 2, "y": 2, "w": 5, "h": 5, "t": "out"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.width, 200.0);
        assert_eq!(page.height, 100.0);
        let visible = page.visible_words();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].x, 10.0);
        assert_eq!(visible[0].y, 10.0);
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let err = Page::from_json(r#"{"width": 10, "height": 10}"#).unwrap_err();
        assert!(matches!(err, PageError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let page = Page::load(file.path()).unwrap();
        assert_eq!(page.visible_words().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Page::load(Path::new("/nonexistent/page.json")).unwrap_err();
        assert!(matches!(err, PageError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/page.json"));
    }

    #[test]
    fn test_with_image_size_overrides_dimensions() {
        let page = Page::from_json(SAMPLE).unwrap().with_image_size((800.0, 400.0));
        assert_eq!(page.bounds(), PixelRect::new(0.0, 0.0, 800.0, 400.0));

        // "offpage" lies inside the larger image
        let texts: Vec<String> = page.visible_words().into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["Hello", "world", "offpage"]);
    }

    #[test]
    fn test_sizeless_page_keeps_words_for_image_space() {
        let page = Page::from_json(
            r#"{"data": [
                {"x": 10, "y": 10, "w": 20, "h": 20, "t": "a"},
                {"x": 40, "y": 40, "w": 20, "h": 20, "t": "b"}
            ]}"#,
        )
        .unwrap();
        assert!(!page.has_known_size());
        assert_eq!(page.visible_words().len(), 2);

        let page = page.with_image_size((200.0, 200.0));
        assert!(page.has_known_size());
        assert_eq!(page.visible_words().len(), 2);

        let page = page.with_image_size((30.0, 30.0));
        let texts: Vec<String> = page.visible_words().into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["a"]);
    }

    #[test]
    fn test_probe_image_size_rejects_non_image() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not an image at all").unwrap();

        let err = probe_image_size(file.path()).unwrap_err();
        assert!(matches!(err, PageError::Image { .. }));
    }
}
