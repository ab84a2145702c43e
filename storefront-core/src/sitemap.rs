//! Static sitemap generation (sitemap 0.9 + image 1.1).
//!
//! Output depends only on the page list and the `lastmod` date, so
//! regenerating on the same day yields byte-identical XML.

use std::fmt::{self, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::data::{BRANDS, CATALOG, CATEGORIES};
use crate::error::StorefrontError;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapImage {
    pub loc: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Path relative to the site root, starting with `/`.
    pub path: String,
    pub priority: f32,
    pub changefreq: ChangeFreq,
    pub images: Vec<SitemapImage>,
}

impl SitemapEntry {
    fn page(path: impl Into<String>, priority: f32, changefreq: ChangeFreq) -> Self {
        Self {
            path: path.into(),
            priority,
            changefreq,
            images: Vec::new(),
        }
    }
}

/// Every public page of the storefront, in a fixed order.
pub fn default_pages() -> Vec<SitemapEntry> {
    let mut pages = vec![
        SitemapEntry::page("/", 1.0, ChangeFreq::Daily),
        SitemapEntry::page("/subscription", 0.9, ChangeFreq::Daily),
        SitemapEntry::page("/allproduct", 0.9, ChangeFreq::Daily),
        SitemapEntry::page("/Contactus", 0.5, ChangeFreq::Monthly),
    ];

    pages.extend(
        CATEGORIES
            .iter()
            .map(|c| SitemapEntry::page(format!("/category/{}", c.id), 0.8, ChangeFreq::Weekly)),
    );
    pages.extend(
        BRANDS
            .iter()
            .map(|b| SitemapEntry::page(format!("/brand/{}", b.slug), 0.7, ChangeFreq::Weekly)),
    );
    pages.extend(CATALOG.iter().map(|item| SitemapEntry {
        path: format!("/productinfo/{}", item.slug),
        priority: 0.8,
        changefreq: ChangeFreq::Weekly,
        images: item
            .image
            .map(|src| SitemapImage {
                loc: src.to_string(),
                title: format!("{} {}", item.name, item.duration),
            })
            .into_iter()
            .collect(),
    }));

    pages
}

/// Serialize `entries` under `base_url` with every `lastmod` set to `date`.
pub fn render(base_url: &str, entries: &[SitemapEntry], date: NaiveDate) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = date.format("%Y-%m-%d").to_string();

    let mut xml = String::new();
    write_document(&mut xml, base, entries, &lastmod).expect("writing to a String cannot fail");
    xml
}

fn write_document(
    xml: &mut String,
    base: &str,
    entries: &[SitemapEntry],
    lastmod: &str,
) -> fmt::Result {
    writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(xml, r#"<urlset xmlns="{}" xmlns:image="{}">"#, SITEMAP_NS, IMAGE_NS)?;

    for entry in entries {
        writeln!(xml, "  <url>")?;
        writeln!(xml, "    <loc>{}</loc>", escape(&format!("{}{}", base, entry.path)))?;
        writeln!(xml, "    <priority>{:.1}</priority>", entry.priority)?;
        writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq)?;
        writeln!(xml, "    <lastmod>{}</lastmod>", lastmod)?;
        for image in &entry.images {
            writeln!(xml, "    <image:image>")?;
            writeln!(xml, "      <image:loc>{}</image:loc>", escape(&absolute(base, &image.loc)))?;
            writeln!(xml, "      <image:title>{}</image:title>", escape(&image.title))?;
            writeln!(xml, "    </image:image>")?;
        }
        writeln!(xml, "  </url>")?;
    }

    writeln!(xml, "</urlset>")
}

/// Root-relative references are resolved against `base`; image sitemaps
/// only accept absolute URLs.
fn absolute(base: &str, loc: &str) -> String {
    if loc.starts_with('/') && !loc.starts_with("//") {
        format!("{}{}", base, loc)
    } else {
        loc.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Write `xml` to `path` unless the file already holds exactly that content.
pub fn write_if_changed(path: &Path, xml: &str) -> Result<WriteOutcome, StorefrontError> {
    match std::fs::read_to_string(path) {
        Ok(existing) if existing == xml => return Ok(WriteOutcome::Unchanged),
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, xml)?;
    tracing::info!(path = %path.display(), bytes = xml.len(), "Sitemap written");
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_same_input_same_bytes() {
        let a = render("https://shop.example.com", &default_pages(), date());
        let b = render("https://shop.example.com", &default_pages(), date());
        assert_eq!(a, b);
    }

    #[test]
    fn test_day_rollover_changes_only_lastmod() {
        let next = date().succ_opt().unwrap();
        let a = render("https://shop.example.com", &default_pages(), date());
        let b = render("https://shop.example.com", &default_pages(), next);
        assert_ne!(a, b);
        assert_eq!(a.replace("2026-10-17", "2026-10-18"), b);
    }

    #[test]
    fn test_url_block_field_order_and_namespaces() {
        let entries = vec![SitemapEntry::page("/", 1.0, ChangeFreq::Daily)];
        let xml = render("https://shop.example.com/", &entries, date());
        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\">\n  \
<url>\n    \
<loc>https://shop.example.com/</loc>\n    \
<priority>1.0</priority>\n    \
<changefreq>daily</changefreq>\n    \
<lastmod>2026-10-17</lastmod>\n  \
</url>\n\
</urlset>\n";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_product_pages_carry_escaped_images() {
        let entries = vec![SitemapEntry {
            path: "/productinfo/a".to_string(),
            priority: 0.8,
            changefreq: ChangeFreq::Weekly,
            images: vec![SitemapImage {
                loc: "https://cdn.example.com/a.webp?w=1&h=2".to_string(),
                title: "Tom & Jerry <HD>".to_string(),
            }],
        }];
        let xml = render("https://shop.example.com", &entries, date());
        assert!(xml.contains("<image:loc>https://cdn.example.com/a.webp?w=1&amp;h=2</image:loc>"));
        assert!(xml.contains("<image:title>Tom &amp; Jerry &lt;HD&gt;</image:title>"));
    }

    #[test]
    fn test_root_relative_image_is_made_absolute() {
        let entries = vec![SitemapEntry {
            path: "/productinfo/a".to_string(),
            priority: 0.8,
            changefreq: ChangeFreq::Weekly,
            images: vec![
                SitemapImage {
                    loc: "/static/img/a.webp".to_string(),
                    title: "A".to_string(),
                },
                SitemapImage {
                    loc: "https://cdn.example.com/b.webp".to_string(),
                    title: "B".to_string(),
                },
            ],
        }];
        let xml = render("https://shop.example.com/", &entries, date());
        assert!(xml.contains("<image:loc>https://shop.example.com/static/img/a.webp</image:loc>"));
        assert!(xml.contains("<image:loc>https://cdn.example.com/b.webp</image:loc>"));
        assert!(!xml.contains("<image:loc>/"));
    }

    #[test]
    fn test_default_pages_cover_catalog() {
        let pages = default_pages();
        for item in CATALOG {
            let path = format!("/productinfo/{}", item.slug);
            let page = pages.iter().find(|p| p.path == path).unwrap();
            assert_eq!(page.images.len(), usize::from(item.image.is_some()));
        }
        assert_eq!(pages[0].path, "/");
    }

    #[test]
    fn test_write_if_changed_is_idempotent() {
        let dir = std::env::temp_dir().join(format!("sitemap-{}", uuid::Uuid::new_v4()));
        let path = dir.join("sitemap.xml");
        let xml = render("https://shop.example.com", &default_pages(), date());

        assert_eq!(write_if_changed(&path, &xml).unwrap(), WriteOutcome::Written);
        assert_eq!(write_if_changed(&path, &xml).unwrap(), WriteOutcome::Unchanged);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), xml);

        std::fs::remove_dir_all(&dir).ok();
    }
}
