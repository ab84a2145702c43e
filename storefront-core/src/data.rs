//! Build-time storefront content: catalog, categories, brands and marketing copy.

use crate::models::{
    Brand, CatalogItem, Category, Hero, MediaKind, MediaSlide, Review, Testimonial, Theme,
};

pub static HERO: Hero = Hero {
    headline: "Premium subscriptions, delivered in minutes",
    subheadline: "Netflix, Spotify, YouTube Premium and more. Pay in NPR with eSewa, Khalti or bank transfer.",
    cta_label: "Browse subscriptions",
    cta_href: "/subscription",
    image: "/static/img/hero.webp",
};

pub static CATEGORIES: &[Category] = &[
    Category { id: "streaming", name: "Streaming", icon: "/static/icons/streaming.svg" },
    Category { id: "music", name: "Music", icon: "/static/icons/music.svg" },
    Category { id: "software", name: "Software & Licenses", icon: "/static/icons/software.svg" },
    Category { id: "ai", name: "AI Tools", icon: "/static/icons/ai.svg" },
    Category { id: "vpn", name: "VPN & Security", icon: "/static/icons/vpn.svg" },
    Category { id: "gaming", name: "Gaming", icon: "/static/icons/gaming.svg" },
];

pub static BRANDS: &[Brand] = &[
    Brand { slug: "netflix", name: "Netflix", logo: "/static/brands/netflix.svg", tagline: "Movies and series in 4K UHD" },
    Brand { slug: "spotify", name: "Spotify", logo: "/static/brands/spotify.svg", tagline: "Ad-free music, offline downloads" },
    Brand { slug: "youtube", name: "YouTube", logo: "/static/brands/youtube.svg", tagline: "No ads, background play, YouTube Music" },
    Brand { slug: "prime-video", name: "Prime Video", logo: "/static/brands/prime.svg", tagline: "Amazon Originals and blockbuster films" },
    Brand { slug: "disney-hotstar", name: "Disney+ Hotstar", logo: "/static/brands/hotstar.svg", tagline: "Live cricket, Disney and Marvel" },
    Brand { slug: "canva", name: "Canva", logo: "/static/brands/canva.svg", tagline: "Pro templates and brand kits" },
    Brand { slug: "chatgpt", name: "ChatGPT", logo: "/static/brands/chatgpt.svg", tagline: "Plus plan with the latest models" },
    Brand { slug: "microsoft", name: "Microsoft", logo: "/static/brands/microsoft.svg", tagline: "Genuine Windows and Office keys" },
    Brand { slug: "nordvpn", name: "NordVPN", logo: "/static/brands/nordvpn.svg", tagline: "Private browsing on six devices" },
];

pub static CATALOG: &[CatalogItem] = &[
    CatalogItem {
        slug: "netflix-premium-1-month",
        name: "Netflix Premium",
        brand: "netflix",
        category: "streaming",
        price_npr: 599,
        original_price_npr: Some(799),
        duration: "1 Month",
        image: Some("https://cdn.subscriptionnepal.com/products/netflix.webp"),
        badge: Some("Best Seller"),
        theme: Theme::Red,
        priority: 10,
        description: "4K UHD private profile on a shared premium account. Works on TV, mobile and laptop.",
    },
    CatalogItem {
        slug: "netflix-premium-3-months",
        name: "Netflix Premium",
        brand: "netflix",
        category: "streaming",
        price_npr: 1699,
        original_price_npr: Some(2397),
        duration: "3 Months",
        image: Some("https://cdn.subscriptionnepal.com/products/netflix.webp"),
        badge: Some("Save 29%"),
        theme: Theme::Red,
        priority: 8,
        description: "Three months of 4K UHD streaming on a private profile with renewal reminders.",
    },
    CatalogItem {
        slug: "spotify-premium-individual",
        name: "Spotify Premium Individual",
        brand: "spotify",
        category: "music",
        price_npr: 399,
        original_price_npr: Some(499),
        duration: "1 Month",
        image: Some("https://cdn.subscriptionnepal.com/products/spotify.webp"),
        badge: Some("Popular"),
        theme: Theme::Green,
        priority: 9,
        description: "Upgrade your own Spotify account. Ad-free listening and offline downloads.",
    },
    CatalogItem {
        slug: "youtube-premium-1-month",
        name: "YouTube Premium",
        brand: "youtube",
        category: "streaming",
        price_npr: 349,
        original_price_npr: None,
        duration: "1 Month",
        image: Some("https://cdn.subscriptionnepal.com/products/youtube.webp"),
        badge: None,
        theme: Theme::Red,
        priority: 7,
        description: "Ad-free videos, background play and YouTube Music on your own Google account.",
    },
    CatalogItem {
        slug: "prime-video-1-month",
        name: "Amazon Prime Video",
        brand: "prime-video",
        category: "streaming",
        price_npr: 299,
        original_price_npr: Some(399),
        duration: "1 Month",
        image: Some("https://cdn.subscriptionnepal.com/products/prime.webp"),
        badge: None,
        theme: Theme::Blue,
        priority: 5,
        description: "Amazon Originals, Indian films and series in HD on a private profile.",
    },
    CatalogItem {
        slug: "disney-hotstar-super",
        name: "Disney+ Hotstar Super",
        brand: "disney-hotstar",
        category: "streaming",
        price_npr: 449,
        original_price_npr: None,
        duration: "1 Month",
        image: Some("https://cdn.subscriptionnepal.com/products/hotstar.webp"),
        badge: Some("Cricket"),
        theme: Theme::Blue,
        priority: 6,
        description: "Live cricket, Disney, Marvel and Star content on two devices.",
    },
    CatalogItem {
        slug: "canva-pro-1-year",
        name: "Canva Pro",
        brand: "canva",
        category: "software",
        price_npr: 1499,
        original_price_npr: Some(2999),
        duration: "1 Year",
        image: Some("https://cdn.subscriptionnepal.com/products/canva.webp"),
        badge: Some("50% Off"),
        theme: Theme::Purple,
        priority: 6,
        description: "Premium templates, background remover and brand kits on your own email.",
    },
    CatalogItem {
        slug: "chatgpt-plus-1-month",
        name: "ChatGPT Plus",
        brand: "chatgpt",
        category: "ai",
        price_npr: 3199,
        original_price_npr: None,
        duration: "1 Month",
        image: Some("https://cdn.subscriptionnepal.com/products/chatgpt.webp"),
        badge: Some("New"),
        theme: Theme::Dark,
        priority: 8,
        description: "ChatGPT Plus activated on your own OpenAI account.",
    },
    CatalogItem {
        slug: "microsoft-365-family",
        name: "Microsoft 365 Family",
        brand: "microsoft",
        category: "software",
        price_npr: 2499,
        original_price_npr: Some(3499),
        duration: "1 Year",
        image: Some("https://cdn.subscriptionnepal.com/products/m365.webp"),
        badge: None,
        theme: Theme::Orange,
        priority: 4,
        description: "Word, Excel, PowerPoint and 1 TB OneDrive storage.",
    },
    CatalogItem {
        slug: "windows-11-pro-key",
        name: "Windows 11 Pro License",
        brand: "microsoft",
        category: "software",
        price_npr: 1999,
        original_price_npr: None,
        duration: "Lifetime",
        image: None,
        badge: Some("Genuine"),
        theme: Theme::Blue,
        priority: 3,
        description: "Retail activation key delivered by email with install guide.",
    },
    CatalogItem {
        slug: "nordvpn-1-year",
        name: "NordVPN Standard",
        brand: "nordvpn",
        category: "vpn",
        price_npr: 2199,
        original_price_npr: Some(2999),
        duration: "1 Year",
        image: Some("https://cdn.subscriptionnepal.com/products/nordvpn.webp"),
        badge: None,
        theme: Theme::Blue,
        priority: 2,
        description: "Private browsing on up to six devices with threat protection.",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Aarav Shrestha",
        location: "Kathmandu",
        quote: "Paid with eSewa and my Netflix profile was ready in ten minutes. Renewed three times now without a problem.",
        rating: 5,
        avatar: None,
    },
    Testimonial {
        name: "Pooja Gurung",
        location: "Pokhara",
        quote: "Spotify upgrade on my own account, no new login needed. Support replied on WhatsApp late at night.",
        rating: 5,
        avatar: Some("https://cdn.subscriptionnepal.com/avatars/pooja.webp"),
    },
    Testimonial {
        name: "Bikash Thapa",
        location: "Butwal",
        quote: "Canva Pro for my design work at half the price. Clear instructions and quick delivery.",
        rating: 4,
        avatar: None,
    },
];

pub static REVIEWS: &[Review] = &[
    Review { author: "Sujan K.", product: "YouTube Premium", rating: 5, text: "No more ads, works on TV too." },
    Review { author: "Nisha M.", product: "Disney+ Hotstar Super", rating: 5, text: "Watched the whole series live." },
    Review { author: "Rohan B.", product: "ChatGPT Plus", rating: 4, text: "Activated the same day." },
    Review { author: "Anjali P.", product: "Microsoft 365 Family", rating: 5, text: "Shared with my whole family." },
];

pub static MEDIA_SLIDES: &[MediaSlide] = &[
    MediaSlide { title: "How delivery works", media: "https://cdn.subscriptionnepal.com/media/delivery.mp4", kind: MediaKind::Video },
    MediaSlide { title: "Festival bundle offers", media: "https://cdn.subscriptionnepal.com/media/dashain-offer.webp", kind: MediaKind::Image },
    MediaSlide { title: "Pay with eSewa or Khalti", media: "https://cdn.subscriptionnepal.com/media/payments.webp", kind: MediaKind::Image },
];

pub fn find_product(slug: &str) -> Option<&'static CatalogItem> {
    CATALOG.iter().find(|item| item.slug == slug)
}

pub fn find_brand(slug: &str) -> Option<&'static Brand> {
    BRANDS.iter().find(|brand| brand.slug.eq_ignore_ascii_case(slug))
}

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id.eq_ignore_ascii_case(id))
}
