//! Server-rendered storefront pages.
//!
//! Each page maps static catalog/content data to view models and renders a
//! minijinja template. Sections whose data set is empty are passed as `None`
//! so the template omits them entirely.

use minijinja::{context, Environment, Error};
use serde::Serialize;
use storefront_core::catalog::{self, format_npr, CarouselSettings};
use storefront_core::data::{
    self, BRANDS, CATALOG, CATEGORIES, HERO, MEDIA_SLIDES, REVIEWS, TESTIMONIALS,
};
use storefront_core::models::{CatalogItem, ContactSubmission, Theme};
use storefront_core::{display_sequence, images, whatsapp, StorefrontConfig};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("macros.html", include_str!("../templates/macros.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("listing.html", include_str!("../templates/listing.html")),
    ("product.html", include_str!("../templates/product.html")),
    ("brand.html", include_str!("../templates/brand.html")),
    ("contact.html", include_str!("../templates/contact.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

/// Duplication used by auto-scrolling strips so the wrap point is invisible.
const CAROUSEL_DUPLICATION: usize = 2;

// ============================================================================
// View models
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    pub name: String,
    pub base_url: String,
    pub fallback_image: String,
    pub img_onerror: String,
    pub whatsapp_link: String,
    /// The chat widget re-reads history on this period so server wipes show up.
    pub chat_refresh_seconds: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub slug: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
    pub category: &'static str,
    pub price: String,
    pub original_price: Option<String>,
    pub discount: Option<u32>,
    pub badge: Option<&'static str>,
    pub theme: Theme,
    pub image: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub id: &'static str,
    pub title: &'static str,
    pub cards: Vec<CardView>,
}

/// Outcome shown above the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ContactStatus {
    Idle,
    Sent,
    Failed { reason: String },
}

// ============================================================================
// Renderer
// ============================================================================

pub struct PageRenderer {
    env: Environment<'static>,
    site: SiteView,
    whatsapp_phone: String,
    carousel: CarouselSettings,
}

impl PageRenderer {
    pub fn new(config: &StorefrontConfig) -> Result<Self, Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        let fallback = config.images.fallback_url.clone();
        let site = SiteView {
            name: config.service.site_name.clone(),
            base_url: config.service.base_url.trim_end_matches('/').to_string(),
            img_onerror: images::onerror_handler(&fallback),
            fallback_image: fallback,
            whatsapp_link: whatsapp::wa_me_link(
                &config.chat.whatsapp_phone,
                "Hello! I'd like to know more about your subscriptions.",
            ),
            chat_refresh_seconds: config.chat.reset_interval_seconds,
        };

        Ok(Self {
            env,
            site,
            whatsapp_phone: config.chat.whatsapp_phone.clone(),
            carousel: CarouselSettings::default(),
        })
    }

    pub fn site(&self) -> &SiteView {
        &self.site
    }

    fn card(&self, item: &CatalogItem) -> CardView {
        CardView {
            slug: item.slug,
            name: item.name,
            duration: item.duration,
            category: item.category,
            price: format_npr(item.price_npr),
            original_price: item.original_price_npr.map(format_npr),
            discount: item.discount_percent(),
            badge: item.badge,
            theme: item.theme,
            image: images::resolve(item.image, &self.site.fallback_image).to_string(),
            href: format!("/productinfo/{}", item.slug),
        }
    }

    fn cards<'a>(&self, items: impl IntoIterator<Item = &'a CatalogItem>) -> Vec<CardView> {
        items.into_iter().map(|item| self.card(item)).collect()
    }

    /// Category listing section, `None` when the category has no items.
    pub fn category_section(&self, id: &'static str, title: &'static str) -> Option<SectionView> {
        display_sequence(CATALOG, Some(id), 1).map(|seq| SectionView {
            id,
            title,
            cards: self.cards(seq.into_cards()),
        })
    }

    fn render(&self, template: &str, ctx: minijinja::Value) -> Result<String, Error> {
        self.env.get_template(template)?.render(ctx)
    }

    pub fn home(&self) -> Result<String, Error> {
        let featured = display_sequence(catalog::featured(CATALOG), None, CAROUSEL_DUPLICATION)
            .map(|seq| self.cards(seq.into_cards()));
        let subscriptions: Vec<SectionView> = ["streaming", "music"]
            .iter()
            .filter_map(|id| data::find_category(id))
            .filter_map(|c| self.category_section(c.id, c.name))
            .collect();
        let categories: Vec<_> = CATEGORIES
            .iter()
            .filter(|c| CATALOG.iter().any(|item| item.in_category(c.id)))
            .collect();

        self.render(
            "home.html",
            context! {
                site => &self.site,
                title => "Home",
                path => "/",
                hero => &HERO,
                hero_image => images::resolve(Some(HERO.image), &self.site.fallback_image),
                categories => categories,
                featured => featured,
                carousel => self.carousel,
                brands => BRANDS,
                subscriptions => non_empty(subscriptions),
                testimonials => non_empty(TESTIMONIALS.to_vec()),
                reviews => non_empty(REVIEWS.to_vec()),
                media => non_empty(MEDIA_SLIDES.to_vec()),
            },
        )
    }

    /// Every category with items, one section each.
    pub fn subscription(&self) -> Result<String, Error> {
        let sections: Vec<SectionView> = CATEGORIES
            .iter()
            .filter_map(|c| self.category_section(c.id, c.name))
            .collect();

        self.render(
            "listing.html",
            context! {
                site => &self.site,
                title => "Subscriptions",
                path => "/subscription",
                heading => "All subscriptions by category",
                sections => non_empty(sections),
            },
        )
    }

    pub fn all_products(&self) -> Result<String, Error> {
        let section = display_sequence(CATALOG, None, 1).map(|seq| SectionView {
            id: "all",
            title: "All products",
            cards: self.cards(seq.into_cards()),
        });

        self.render(
            "listing.html",
            context! {
                site => &self.site,
                title => "All products",
                path => "/allproduct",
                heading => "All products",
                sections => section.map(|s| vec![s]),
            },
        )
    }

    /// Category page. The listing section is omitted when nothing matches.
    pub fn category(&self, id: &str) -> Result<String, Error> {
        let heading = data::find_category(id)
            .map(|c| c.name.to_string())
            .unwrap_or_else(|| id.to_string());
        let section = display_sequence(CATALOG, Some(id), 1).map(|seq| SectionView {
            id: "category",
            title: "",
            cards: self.cards(seq.into_cards()),
        });

        self.render(
            "listing.html",
            context! {
                site => &self.site,
                title => &heading,
                path => format!("/category/{}", id),
                heading => &heading,
                sections => section.map(|s| vec![s]),
                empty_note => "No products in this category yet. Ask us on WhatsApp and we will source it for you.",
            },
        )
    }

    pub fn product(&self, slug: &str) -> Result<Option<String>, Error> {
        let Some(item) = data::find_product(slug) else {
            return Ok(None);
        };
        let related = display_sequence(
            CATALOG.iter().filter(|other| other.slug != item.slug),
            Some(item.category),
            1,
        )
        .map(|seq| self.cards(seq.into_cards()));

        self.render(
            "product.html",
            context! {
                site => &self.site,
                title => format!("{} {}", item.name, item.duration),
                path => format!("/productinfo/{}", item.slug),
                product => self.card(item),
                description => item.description,
                order_link => whatsapp::order_link(&self.whatsapp_phone, item),
                order_link_desktop => whatsapp::api_send_link(&self.whatsapp_phone, &whatsapp::order_message(item)),
                related => related,
            },
        )
        .map(Some)
    }

    /// Per-brand marketing page.
    pub fn brand(&self, slug: &str) -> Result<Option<String>, Error> {
        let Some(brand) = data::find_brand(slug) else {
            return Ok(None);
        };
        let cards = self.cards(catalog::by_brand(CATALOG, brand.slug));

        self.render(
            "brand.html",
            context! {
                site => &self.site,
                title => brand.name,
                path => format!("/brand/{}", brand.slug),
                brand => brand,
                logo => images::resolve(Some(brand.logo), &self.site.fallback_image),
                cards => non_empty(cards),
            },
        )
        .map(Some)
    }

    pub fn contact(&self, status: &ContactStatus, form: &ContactSubmission) -> Result<String, Error> {
        let services: Vec<String> = CATALOG
            .iter()
            .map(|item| format!("{} ({})", item.name, item.duration))
            .collect();

        self.render(
            "contact.html",
            context! {
                site => &self.site,
                title => "Contact us",
                path => "/Contactus",
                status => status,
                form => form,
                services => services,
            },
        )
    }

    pub fn not_found(&self) -> Result<String, Error> {
        self.render(
            "not_found.html",
            context! {
                site => &self.site,
                title => "Page not found",
                path => "",
            },
        )
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
