use crate::llm::EncodedImage;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use std::fs;
use std::path::{Path, PathBuf};

/// Keep the most recent `max_images` screenshots, order preserved.
///
/// Recency wins: when the trace holds more screenshots than the cap, the
/// earliest entries are dropped first.
pub fn select_recent(screenshots: &[PathBuf], max_images: usize) -> &[PathBuf] {
    if screenshots.len() <= max_images {
        screenshots
    } else {
        &screenshots[screenshots.len() - max_images..]
    }
}

/// Read one screenshot artifact and base64-encode it for transport.
///
/// Best-effort: any read failure (missing file, permissions, I/O) is logged
/// as a warning and absorbed. Siblings are unaffected.
pub fn encode_screenshot(path: &Path) -> Option<EncodedImage> {
    match fs::read(path) {
        Ok(bytes) => Some(EncodedImage::png(BASE64_STANDARD.encode(bytes))),
        Err(err) => {
            tracing::warn!("failed to encode screenshot {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("shot_{i}.png"))).collect()
    }

    #[test]
    fn selection_under_cap_is_identity() {
        let shots = paths(4);
        assert_eq!(select_recent(&shots, 10), &shots[..]);
        assert_eq!(select_recent(&shots, 4), &shots[..]);
    }

    #[test]
    fn selection_over_cap_keeps_suffix_in_order() {
        let shots = paths(15);
        let selected = select_recent(&shots, 10);
        assert_eq!(selected.len(), 10);
        assert_eq!(selected, &shots[5..]);
    }

    #[test]
    fn selection_length_is_min_of_len_and_cap() {
        for n in 0..6 {
            for cap in 0..6 {
                let shots = paths(n);
                assert_eq!(select_recent(&shots, cap).len(), n.min(cap));
            }
        }
    }

    #[test]
    fn cap_of_zero_selects_nothing() {
        let shots = paths(3);
        assert!(select_recent(&shots, 0).is_empty());
    }

    #[test]
    fn duplicates_survive_selection() {
        let shots = vec![
            PathBuf::from("a.png"),
            PathBuf::from("b.png"),
            PathBuf::from("b.png"),
        ];
        let selected = select_recent(&shots, 2);
        assert_eq!(selected, &[PathBuf::from("b.png"), PathBuf::from("b.png")]);
    }

    #[test]
    fn encode_round_trips_original_bytes() {
        let bytes: Vec<u8> = (0..=255_u8).collect();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();

        let image = encode_screenshot(file.path()).unwrap();
        assert_eq!(image.media_type, "image/png");
        assert_eq!(BASE64_STANDARD.decode(&image.data).unwrap(), bytes);
        assert!(image.url().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn missing_file_is_absent_not_fatal() {
        assert!(encode_screenshot(Path::new("/definitely/not/here.png")).is_none());
    }

    #[test]
    fn sibling_failures_are_independent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"pixels").unwrap();

        let shots = vec![
            PathBuf::from("/missing/one.png"),
            file.path().to_path_buf(),
            PathBuf::from("/missing/two.png"),
        ];
        let encoded: Vec<_> = shots.iter().filter_map(|p| encode_screenshot(p)).collect();
        assert_eq!(encoded.len(), 1);
        assert_eq!(BASE64_STANDARD.decode(&encoded[0].data).unwrap(), b"pixels");
    }
}
