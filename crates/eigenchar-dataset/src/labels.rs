//! Ground-truth label loading: one label per line, index-aligned with the
//! page's character boxes.

use std::path::Path;

use eigenchar_core::{Label, Result};

/// Load a page's labels, appending to `into` so multi-page corpora
/// accumulate in page order. Blank lines are skipped (they cannot be
/// labels and would silently misalign the corpus otherwise).
pub fn load_labels(path: &Path, into: &mut Vec<Label>) -> Result<()> {
    let text = std::fs::read_to_string(path)?;

    into.extend(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_accumulate_across_pages() {
        let dir = std::env::temp_dir().join(format!("eigenchar-labels-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let first = dir.join("p1.labels.txt");
        let second = dir.join("p2.labels.txt");
        std::fs::write(&first, "A\nB\n").unwrap();
        std::fs::write(&second, "C\n\nfi\n").unwrap();

        let mut labels = Vec::new();
        load_labels(&first, &mut labels).unwrap();
        load_labels(&second, &mut labels).unwrap();

        assert_eq!(labels, vec!["A", "B", "C", "fi"]);
    }
}
