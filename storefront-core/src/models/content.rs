use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    pub rating: u8,
    pub avatar: Option<&'static str>,
}

/// Short star review shown in the reviews strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub author: &'static str,
    pub product: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaSlide {
    pub title: &'static str,
    pub media: &'static str,
    pub kind: MediaKind,
}
