//! Page decoding: a scanned page plus its character segmentation boxes
//! become an ordered list of character crops.
//!
//! A page on disk is a file trio sharing one stem:
//! - `<stem>.png`: the full-page grayscale scan
//! - `<stem>.boxes.csv`: one `x,y,width,height` line per character,
//!   in page (reading) order
//! - `<stem>.labels.txt`: one label per line, aligned with the boxes

use std::path::{Path, PathBuf};

use eigenchar_core::{CharBox, CharImage, ClassifyError, Result};

/// The file trio describing one scanned page.
#[derive(Debug, Clone)]
pub struct PagePaths {
    pub image: PathBuf,
    pub boxes: PathBuf,
    pub labels: PathBuf,
}

impl PagePaths {
    /// Derive the trio from a shared stem, e.g. `data/train.1`.
    pub fn from_stem(stem: &Path) -> Self {
        Self {
            image: with_suffix(stem, ".png"),
            boxes: with_suffix(stem, ".boxes.csv"),
            labels: with_suffix(stem, ".labels.txt"),
        }
    }
}

fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Decode a full-page scan to a grayscale image.
pub fn load_page_image(path: &Path) -> Result<CharImage> {
    let img = image::open(path)
        .map_err(|e| ClassifyError::ImageDecode(format!("{}: {e}", path.display())))?;

    let gray = img.to_luma8();
    let width = gray.width();
    let height = gray.height();
    Ok(CharImage::new(gray.into_raw(), width, height))
}

/// Parse a character-box CSV: one `x,y,width,height` line per character.
/// Blank lines are skipped.
pub fn load_boxes(path: &Path) -> Result<Vec<CharBox>> {
    let text = std::fs::read_to_string(path)?;

    let mut boxes = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(ClassifyError::BoxesParse(format!(
                "{}:{}: expected x,y,width,height",
                path.display(),
                lineno + 1
            )));
        }

        let parse = |field: &str| {
            field.parse::<u32>().map_err(|_| {
                ClassifyError::BoxesParse(format!(
                    "{}:{}: invalid coordinate {field:?}",
                    path.display(),
                    lineno + 1
                ))
            })
        };

        boxes.push(CharBox::new(
            parse(fields[0])?,
            parse(fields[1])?,
            parse(fields[2])?,
            parse(fields[3])?,
        ));
    }

    Ok(boxes)
}

/// Crop one character from a page, clamping the box to the page bounds.
pub fn crop(page: &CharImage, char_box: &CharBox) -> CharImage {
    let x0 = char_box.x.min(page.width);
    let y0 = char_box.y.min(page.height);
    let x1 = char_box.right().min(page.width);
    let y1 = char_box.bottom().min(page.height);

    CharImage::from_fn(y1 - y0, x1 - x0, |row, col| page.get(y0 + row, x0 + col))
}

/// Load one page's character crops, appending to `into` so multi-page
/// corpora accumulate in page order. Returns the page's boxes.
pub fn load_char_images(page: &PagePaths, into: &mut Vec<CharImage>) -> Result<Vec<CharBox>> {
    let page_image = load_page_image(&page.image)?;
    let boxes = load_boxes(&page.boxes)?;

    into.extend(boxes.iter().map(|b| crop(&page_image, b)));

    tracing::debug!(
        page = %page.image.display(),
        chars = boxes.len(),
        "loaded page"
    );

    Ok(boxes)
}
