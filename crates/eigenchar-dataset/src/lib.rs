//! Labelled character corpora on disk.
//!
//! Each page is a `<stem>.png` / `<stem>.boxes.csv` / `<stem>.labels.txt`
//! trio; the loaders append per page into caller-owned accumulators so a
//! corpus can span any number of pages.

pub mod labels;
pub mod page;

pub use labels::load_labels;
pub use page::{crop, load_boxes, load_char_images, load_page_image, PagePaths};

use eigenchar_core::{CharImage, ClassifyError, Label, Result};
use rayon::prelude::*;

/// Load a multi-page labelled corpus, decoding pages in parallel while
/// preserving page order. Image and label counts are checked per page so
/// a misaligned page is reported by name rather than as a corpus-level
/// count mismatch.
pub fn load_corpus(pages: &[PagePaths]) -> Result<(Vec<CharImage>, Vec<Label>)> {
    let per_page: Vec<Result<(Vec<CharImage>, Vec<Label>)>> = pages
        .par_iter()
        .map(|page| {
            let mut images = Vec::new();
            load_char_images(page, &mut images)?;

            let mut page_labels = Vec::new();
            load_labels(&page.labels, &mut page_labels)?;

            if images.len() != page_labels.len() {
                return Err(ClassifyError::InvalidInput(format!(
                    "{}: {} boxes but {} labels",
                    page.image.display(),
                    images.len(),
                    page_labels.len()
                )));
            }

            Ok((images, page_labels))
        })
        .collect();

    let mut images = Vec::new();
    let mut labels = Vec::new();
    for result in per_page {
        let (page_images, page_labels) = result?;
        images.extend(page_images);
        labels.extend(page_labels);
    }

    tracing::info!(
        pages = pages.len(),
        chars = images.len(),
        "loaded corpus"
    );

    Ok((images, labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Write a synthetic two-character page trio and return its stem.
    fn write_page(dir: &PathBuf, stem: &str, values: [u8; 2], labels: [&str; 2]) -> PagePaths {
        let page = image::GrayImage::from_fn(8, 4, |x, _y| {
            image::Luma([if x < 4 { values[0] } else { values[1] }])
        });
        let stem_path = dir.join(stem);
        page.save(stem_path.with_extension("png")).unwrap();
        std::fs::write(
            dir.join(format!("{stem}.boxes.csv")),
            "0,0,4,4\n4,0,4,4\n",
        )
        .unwrap();
        std::fs::write(
            dir.join(format!("{stem}.labels.txt")),
            format!("{}\n{}\n", labels[0], labels[1]),
        )
        .unwrap();
        PagePaths::from_stem(&stem_path)
    }

    #[test]
    fn corpus_accumulates_pages_in_order() {
        let dir = std::env::temp_dir().join(format!("eigenchar-corpus-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let first = write_page(&dir, "p1", [10, 20], ["a", "b"]);
        let second = write_page(&dir, "p2", [30, 40], ["c", "d"]);

        let (images, labels) = load_corpus(&[first, second]).unwrap();
        assert_eq!(images.len(), 4);
        assert_eq!(labels, vec!["a", "b", "c", "d"]);
        assert_eq!(images[0].get(0, 0), 10);
        assert_eq!(images[3].get(0, 0), 40);
        assert_eq!(images[0].width, 4);
        assert_eq!(images[0].height, 4);
    }

    #[test]
    fn misaligned_page_is_reported() {
        let dir = std::env::temp_dir().join(format!("eigenchar-misalign-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let page = write_page(&dir, "p1", [10, 20], ["a", "b"]);
        std::fs::write(&page.labels, "a\n").unwrap();

        assert!(matches!(
            load_corpus(&[page]),
            Err(ClassifyError::InvalidInput(_))
        ));
    }
}
