//! Deployment-aware asset path resolution.
//!
//! The app can be hosted under a sub-path (GitHub Pages serves it from
//! `/aniversari70/`), so relative media paths from the catalog are joined
//! against the document base URI rather than the origin root. Callers
//! treat the result as opaque.

/// Fully-qualified locator for a catalog-relative asset path.
pub fn asset_url(path: &str) -> String {
    let base = document_base().unwrap_or_else(|| "/".to_string());
    join(&base, path)
}

/// Join a base URI and a relative path, resolving against the base's
/// directory the way the browser would (a base of `.../index.html`
/// resolves next to `index.html`, not under it).
fn join(base: &str, path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    let dir = if base.ends_with('/') {
        base
    } else {
        match base.rfind('/') {
            Some(idx) => &base[..=idx],
            None => "/",
        }
    };
    format!("{}{}", dir, trimmed)
}

fn document_base() -> Option<String> {
    web_sys::window()?.document()?.base_uri().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_join_strips_leading_slash() {
        assert_eq!(
            join("https://host/aniversari70/", "/collage/a.jpg"),
            "https://host/aniversari70/collage/a.jpg"
        );
    }

    #[wasm_bindgen_test]
    fn test_join_resolves_against_the_base_directory() {
        assert_eq!(
            join("https://host/aniversari70/index.html", "audio/b.mp3"),
            "https://host/aniversari70/audio/b.mp3"
        );
        assert_eq!(join("https://host/base", "x.jpg"), "https://host/x.jpg");
    }

    #[wasm_bindgen_test]
    fn test_asset_url_is_absolute_under_test_harness() {
        // The harness document always has a base URI; the join must keep
        // the relative tail intact.
        let url = asset_url("images/dia-03.jpg");
        assert!(url.ends_with("images/dia-03.jpg"));
    }
}
