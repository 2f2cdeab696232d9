/// Source chain for an image that may be missing on the server: the primary
/// path, the same path with the other raster extension, then a site-wide
/// fallback. An error on the site-wide fallback ends the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    primary: Option<String>,
    global: String,
    current: String,
}

impl ImageFallback {
    pub fn new(primary: Option<&str>, global: &str) -> Self {
        let primary = primary.filter(|p| !p.is_empty()).map(str::to_owned);
        let current = primary.clone().unwrap_or_else(|| global.to_owned());
        Self {
            primary,
            global: global.to_owned(),
            current,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Advances after a load error. Returns the next source to try, or `None`
    /// when there is nothing left.
    pub fn on_error(&mut self) -> Option<&str> {
        let next = if self.current == self.global {
            None
        } else if Some(&self.current) == self.primary.as_ref() {
            Some(swap_extension(&self.current).unwrap_or_else(|| self.global.clone()))
        } else {
            Some(self.global.clone())
        }?;
        self.current = next;
        Some(&self.current)
    }
}

/// `.png` ↔ `.jpg`; `.jpeg` maps to `.png` as well. Case-insensitive.
fn swap_extension(path: &str) -> Option<String> {
    let (stem, ext) = path.rsplit_once('.')?;
    let swapped = match ext.to_ascii_lowercase().as_str() {
        "png" => "jpg",
        "jpg" | "jpeg" => "png",
        _ => return None,
    };
    Some(format!("{}.{}", stem, swapped))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBAL: &str = "/images/services-kitchens.jpg";

    #[test]
    fn png_falls_back_to_jpg_then_global() {
        let mut chain = ImageFallback::new(Some("/images/works/Kitchen.png"), GLOBAL);
        assert_eq!(chain.current(), "/images/works/Kitchen.png");
        assert_eq!(chain.on_error(), Some("/images/works/Kitchen.jpg"));
        assert_eq!(chain.on_error(), Some(GLOBAL));
        assert_eq!(chain.on_error(), None);
        assert_eq!(chain.current(), GLOBAL);
    }

    #[test]
    fn jpeg_falls_back_to_png() {
        let mut chain = ImageFallback::new(Some("/images/loft.JPEG"), GLOBAL);
        assert_eq!(chain.on_error(), Some("/images/loft.png"));
    }

    #[test]
    fn unknown_extension_goes_straight_to_global() {
        let mut chain = ImageFallback::new(Some("/images/loft.webp"), GLOBAL);
        assert_eq!(chain.on_error(), Some(GLOBAL));
        assert_eq!(chain.on_error(), None);
    }

    #[test]
    fn missing_primary_starts_at_global() {
        let mut chain = ImageFallback::new(None, GLOBAL);
        assert_eq!(chain.current(), GLOBAL);
        assert_eq!(chain.on_error(), None);

        let chain = ImageFallback::new(Some(""), GLOBAL);
        assert_eq!(chain.current(), GLOBAL);
    }
}
