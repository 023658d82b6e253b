//! Memoized resolution of supplier logos.
//!
//! A logo is either a URL usable as-is or a bare filename that has to be
//! resolved against the asset base. Filenames are resolved once each: the
//! carousel asks `schedule` which names still need loading, starts one
//! independent request per name, and feeds each outcome back through
//! `resolve`. A failed load stores a sentinel so the lookup settles on the
//! blank placeholder instead of staying pending.

use std::collections::HashMap;

use crate::model::supplier::Supplier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoSource<'a> {
    /// Absolute URL, site-relative path or data URI.
    Direct(&'a str),
    /// Filename looked up in the asset cache.
    Asset(&'a str),
    Missing,
}

impl<'a> LogoSource<'a> {
    pub fn classify(logo: &'a str) -> LogoSource<'a> {
        let logo = logo.trim();
        if logo.is_empty() {
            LogoSource::Missing
        } else if logo.starts_with("http://")
            || logo.starts_with("https://")
            || logo.starts_with("data:")
            || logo.starts_with('/')
        {
            LogoSource::Direct(logo)
        } else {
            LogoSource::Asset(logo)
        }
    }
}

/// Whether a successful response to a logo request actually carries an image.
///
/// Static hosts that answer unknown paths with the client's `index.html`
/// return 2xx for missing files, so a 2xx with a non-image `Content-Type`
/// counts as a failed load. A response without the header is accepted.
pub fn is_image_content_type(content_type: Option<&str>) -> bool {
    match content_type {
        Some(value) => value.trim().to_ascii_lowercase().starts_with("image/"),
        None => true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Pending,
    Ready(String),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct LogoCache {
    entries: HashMap<String, Entry>,
}

impl LogoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asset filenames of `suppliers` that have never been requested.
    ///
    /// The returned names are marked pending, so calling this again for the
    /// same list yields nothing. Order follows first appearance in the list.
    pub fn schedule(&mut self, suppliers: &[Supplier]) -> Vec<String> {
        let mut names = Vec::new();
        for supplier in suppliers {
            if let LogoSource::Asset(name) = LogoSource::classify(&supplier.logo) {
                if !self.entries.contains_key(name) {
                    self.entries.insert(name.to_string(), Entry::Pending);
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    /// Records the outcome of loading `name`; `None` marks it failed.
    pub fn resolve(&mut self, name: &str, url: Option<String>) {
        let entry = match url {
            Some(url) => Entry::Ready(url),
            None => Entry::Failed,
        };
        self.entries.insert(name.to_string(), entry);
    }

    #[cfg(test)]
    fn is_settled(&self, name: &str) -> bool {
        matches!(
            self.entries.get(name),
            Some(Entry::Ready(_)) | Some(Entry::Failed)
        )
    }

    /// Image URL for a supplier logo, or `None` for the blank placeholder.
    pub fn image_url<'a>(&'a self, logo: &'a str) -> Option<&'a str> {
        match LogoSource::classify(logo) {
            LogoSource::Direct(url) => Some(url),
            LogoSource::Asset(name) => match self.entries.get(name) {
                Some(Entry::Ready(url)) => Some(url.as_str()),
                _ => None,
            },
            LogoSource::Missing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_logo(logo: &str) -> Supplier {
        Supplier {
            logo: logo.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn classify_logo_references() {
        assert_eq!(
            LogoSource::classify("https://cdn.example/a.png"),
            LogoSource::Direct("https://cdn.example/a.png")
        );
        assert_eq!(
            LogoSource::classify("/assets/a.png"),
            LogoSource::Direct("/assets/a.png")
        );
        assert_eq!(
            LogoSource::classify("data:image/png;base64,AAAA"),
            LogoSource::Direct("data:image/png;base64,AAAA")
        );
        assert_eq!(LogoSource::classify(" a.png "), LogoSource::Asset("a.png"));
        assert_eq!(LogoSource::classify("  "), LogoSource::Missing);
    }

    #[test]
    fn schedule_returns_each_asset_once() {
        let mut cache = LogoCache::new();
        let list = vec![
            with_logo("a.png"),
            with_logo("https://cdn.example/b.png"),
            with_logo("a.png"),
            with_logo("c.png"),
            with_logo(""),
        ];
        assert_eq!(cache.schedule(&list), ["a.png", "c.png"]);
        assert!(cache.schedule(&list).is_empty());
        assert!(!cache.is_settled("a.png"));
    }

    #[test]
    fn lookup_follows_resolution() {
        let mut cache = LogoCache::new();
        cache.schedule(&[with_logo("a.png"), with_logo("b.png")]);
        assert_eq!(cache.image_url("a.png"), None);

        cache.resolve("a.png", Some("/assets/a.png".to_string()));
        cache.resolve("b.png", None);
        assert_eq!(cache.image_url("a.png"), Some("/assets/a.png"));
        assert_eq!(cache.image_url("b.png"), None);
        assert!(cache.is_settled("b.png"));
        assert!(cache.schedule(&[with_logo("b.png")]).is_empty());
    }

    #[test]
    fn html_fallback_is_not_an_image() {
        assert!(is_image_content_type(Some("image/png")));
        assert!(is_image_content_type(Some("Image/SVG+XML")));
        assert!(is_image_content_type(None));
        assert!(!is_image_content_type(Some("text/html; charset=utf-8")));
        assert!(!is_image_content_type(Some("application/octet-stream")));
    }

    #[test]
    fn direct_urls_bypass_cache() {
        let cache = LogoCache::new();
        assert_eq!(
            cache.image_url("https://cdn.example/a.png"),
            Some("https://cdn.example/a.png")
        );
        assert_eq!(cache.image_url(""), None);
    }
}
