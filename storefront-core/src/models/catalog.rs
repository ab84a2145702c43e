use serde::Serialize;

/// Card color theme. Serialized as the CSS modifier the templates append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Red,
    Green,
    Blue,
    Purple,
    Orange,
    Dark,
}

/// A sellable subscription or license. Defined at build time, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub slug: &'static str,
    pub name: &'static str,
    pub brand: &'static str,
    pub category: &'static str,
    pub price_npr: u32,
    pub original_price_npr: Option<u32>,
    pub duration: &'static str,
    pub image: Option<&'static str>,
    pub badge: Option<&'static str>,
    pub theme: Theme,
    /// Higher sorts first in the featured carousel.
    pub priority: u8,
    pub description: &'static str,
}

impl CatalogItem {
    /// Whole-percent discount against the strike-through price, if any.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price_npr?;
        if original <= self.price_npr || original == 0 {
            return None;
        }
        Some((original - self.price_npr) * 100 / original)
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub slug: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
    pub tagline: &'static str,
}
