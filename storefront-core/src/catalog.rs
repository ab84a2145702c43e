//! Catalog render pipeline
//!
//! Turns a static, ordered catalog into the card sequence a section renders:
//! optional case-insensitive category filter, optional duplication for the
//! infinite-scroll illusion, and section suppression when nothing matches.
//!
//! Also holds the carousel auto-scroll state machine. The browser runs the
//! same policy from the settings emitted into the page.

use serde::Serialize;

use crate::models::CatalogItem;

// ============================================================================
// Render pipeline
// ============================================================================

/// Ordered cards for one section. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySequence<'a> {
    cards: Vec<&'a CatalogItem>,
    distinct: usize,
}

impl<'a> DisplaySequence<'a> {
    pub fn cards(&self) -> &[&'a CatalogItem] {
        &self.cards
    }

    /// Number of items before duplication.
    pub fn distinct_len(&self) -> usize {
        self.distinct
    }

    pub fn into_cards(self) -> Vec<&'a CatalogItem> {
        self.cards
    }
}

/// Items whose category equals `category` ignoring ASCII case, in catalog order.
/// A missing or whitespace-only filter selects everything. Any other value is
/// matched as given, without trimming.
pub fn filter_by_category<'a, I>(items: I, category: Option<&str>) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    match category.filter(|c| !c.trim().is_empty()) {
        Some(category) => items
            .into_iter()
            .filter(|item| item.in_category(category))
            .collect(),
        None => items.into_iter().collect(),
    }
}

/// Build the display sequence for a section.
///
/// Returns `None` when the filter matches nothing: the caller must render no
/// section at all. `duplication` of 0 is treated as 1.
pub fn display_sequence<'a, I>(
    items: I,
    category: Option<&str>,
    duplication: usize,
) -> Option<DisplaySequence<'a>>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let filtered = filter_by_category(items, category);
    if filtered.is_empty() {
        return None;
    }

    let distinct = filtered.len();
    let cards = std::iter::repeat(filtered)
        .take(duplication.max(1))
        .flatten()
        .collect();

    Some(DisplaySequence { cards, distinct })
}

/// Catalog ordered by descending priority. The sort is stable, so equal
/// priorities keep catalog order.
pub fn featured(items: &[CatalogItem]) -> Vec<&CatalogItem> {
    let mut sorted: Vec<&CatalogItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
    sorted
}

pub fn by_brand<'a>(items: &'a [CatalogItem], brand: &str) -> Vec<&'a CatalogItem> {
    items
        .iter()
        .filter(|item| item.brand.eq_ignore_ascii_case(brand))
        .collect()
}

/// `1699` -> `"Rs. 1,699"`.
pub fn format_npr(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("Rs. {}", grouped)
}

// ============================================================================
// Auto-scroll
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollPolicy {
    /// Reverse direction at both bounds.
    #[default]
    PingPong,
    /// Jump back to 0 on reaching the end of the duplicated strip.
    Wrap,
}

/// Carousel settings emitted into the page as data attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselSettings {
    pub step_px: u32,
    pub interval_ms: u32,
    pub policy: ScrollPolicy,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            step_px: 1,
            interval_ms: 30,
            policy: ScrollPolicy::PingPong,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Scroll position state machine for one carousel.
#[derive(Debug, Clone)]
pub struct AutoScroll {
    position: u32,
    max: u32,
    step: u32,
    policy: ScrollPolicy,
    direction: Direction,
}

impl AutoScroll {
    /// `max` is the scrollable extent (content width minus viewport width).
    pub fn new(max: u32, settings: CarouselSettings) -> Self {
        Self {
            position: 0,
            max,
            step: settings.step_px.max(1),
            policy: settings.policy,
            direction: Direction::Forward,
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one timer tick and return the new position.
    pub fn tick(&mut self) -> u32 {
        if self.max == 0 {
            return 0;
        }

        match (self.policy, self.direction) {
            (ScrollPolicy::Wrap, _) => {
                let next = self.position.saturating_add(self.step);
                self.position = if next >= self.max { 0 } else { next };
            }
            (ScrollPolicy::PingPong, Direction::Forward) => {
                let next = self.position.saturating_add(self.step);
                if next >= self.max {
                    self.position = self.max;
                    self.direction = Direction::Backward;
                } else {
                    self.position = next;
                }
            }
            (ScrollPolicy::PingPong, Direction::Backward) => {
                if self.position <= self.step {
                    self.position = 0;
                    self.direction = Direction::Forward;
                } else {
                    self.position -= self.step;
                }
            }
        }

        self.position
    }
}
