//! Regenerates the collage image list consumed by the frontend.
//!
//! Scans `frontend/static/collage` for JPEG files and writes the sorted
//! list to `frontend/data/images.json`. Run it from the workspace root
//! after adding or removing photos:
//!
//! ```text
//! cargo run -p xtask
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const COLLAGE_DIR: &str = "frontend/static/collage";
const OUTPUT_PATH: &str = "frontend/data/images.json";

fn main() -> Result<()> {
    let mut images = Vec::new();
    for entry in fs::read_dir(Path::new(COLLAGE_DIR))
        .with_context(|| format!("reading {}", COLLAGE_DIR))?
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_jpeg(&name) {
            images.push(format!("collage/{}", name));
        }
    }
    images.sort();

    let json = serde_json::to_string_pretty(&images)?;
    fs::write(OUTPUT_PATH, json + "\n").with_context(|| format!("writing {}", OUTPUT_PATH))?;

    println!("wrote {} image paths to {}", images.len(), OUTPUT_PATH);
    Ok(())
}

fn is_jpeg(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".jpg") || lower.ends_with(".jpeg")
}
