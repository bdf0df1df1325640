#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const STAMP: &str = "2024-01-15 10:30:00";

const CANDIDATE_FONTS: &[&str] = &[
    "Hack-Regular.ttf",
    "/usr/share/fonts/truetype/hack/Hack-Regular.ttf",
    "/usr/share/fonts/TTF/Hack-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// A usable TrueType font for rendering tests.
///
/// `CLOCKSTAMP_TEST_FONT` wins; otherwise the first common system font found.
/// Returns `None` (and the caller skips) when nothing is installed.
pub fn test_font() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("CLOCKSTAMP_TEST_FONT") {
        let p = PathBuf::from(p);
        if p.is_file() {
            return Some(p);
        }
    }
    let found = CANDIDATE_FONTS.iter().map(PathBuf::from).find(|p| p.is_file());
    if found.is_none() {
        println!("No TrueType font found; set CLOCKSTAMP_TEST_FONT to run this test. Skipping.");
    }
    found
}

pub struct TestDir {
    pub path: PathBuf,
}

impl TestDir {
    pub fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path =
            std::env::temp_dir().join(format!("clockstamp_{tag}_{}_{}", std::process::id(), ts));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
