//! Everything the page shows that isn't markup: dishes, photos, quotes,
//! contact details and the reservation hours. Loaded once at startup and
//! passed down to each section.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::carousel::{DEFAULT_AUTO_ADVANCE_MS, DEFAULT_MARQUEE_SPEED};
use crate::menu::MenuItem;
use crate::slots::OperatingHours;

const BUNDLED_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate id '{id}' in {section}")]
    DuplicateId { section: &'static str, id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInfo {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub tasting_from: String,
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        Self {
            name: "Aroma & Co.".to_string(),
            tagline: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            tasting_from: String::new(),
        }
    }
}

/// One row of the footer's opening-hours block ("Mon — Fri", "11:30 — 22:00")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHoursLine {
    pub days: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedDish {
    pub id: u32,
    pub name: String,
    pub desc: String,
    pub price: String,
    pub tag: String,
    #[serde(default)]
    pub emoji: String,
}

impl FeaturedDish {
    pub fn aria_label(&self) -> String {
        format!("{} — {} — {}", self.name, self.desc, self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub src: String,
    pub alt: String,
    #[serde(default, rename = "blurDataURL", skip_serializing_if = "Option::is_none")]
    pub blur_data_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub text: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub image: String,
    pub chef_image: String,
    pub alt: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            image: "/images/hero/plate.png".to_string(),
            chef_image: "/images/hero/chef.png".to_string(),
            alt: "Signature dish".to_string(),
        }
    }
}

/// Timing knobs for the decorative sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSettings {
    pub testimonial_auto_ms: u32,
    pub gallery_speed: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            testimonial_auto_ms: DEFAULT_AUTO_ADVANCE_MS,
            gallery_speed: DEFAULT_MARQUEE_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub restaurant: RestaurantInfo,
    pub reservation_hours: OperatingHours,
    pub opening_hours: Vec<OpeningHoursLine>,
    pub hero: HeroContent,
    pub featured: Vec<FeaturedDish>,
    pub menu: Vec<MenuItem>,
    pub gallery: Vec<GalleryImage>,
    pub testimonials: Vec<Testimonial>,
    pub carousel: CarouselSettings,
}

impl SiteContent {
    /// The content shipped with the site
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.check_ids()?;
        tracing::debug!(
            "📋 CONTENT: loaded {} menu items, {} featured, {} photos, {} testimonials",
            content.menu.len(),
            content.featured.len(),
            content.gallery.len(),
            content.testimonials.len()
        );
        Ok(content)
    }

    /// Ids are used as list keys when rendering, so they must be unique per section
    fn check_ids(&self) -> Result<(), ContentError> {
        unique("menu", self.menu.iter().map(|m| m.id.clone()))?;
        unique("featured", self.featured.iter().map(|f| f.id.to_string()))?;
        unique("gallery", self.gallery.iter().map(|g| g.id.to_string()))?;
        unique("testimonials", self.testimonials.iter().map(|t| t.id.to_string()))?;
        Ok(())
    }
}

fn unique(section: &'static str, ids: impl Iterator<Item = String>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            return Err(ContentError::DuplicateId { section, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{filter_by_category, MenuCategory};

    #[test]
    fn test_bundled_content_loads() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.restaurant.name, "Aroma & Co.");
        assert_eq!(content.reservation_hours, OperatingHours::default());
        assert_eq!(content.menu.len(), 6);
        assert_eq!(content.featured.len(), 3);
        assert_eq!(content.gallery.len(), 5);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(filter_by_category(&content.menu, MenuCategory::Mains).len(), 2);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let content = SiteContent::from_json("{}").unwrap();
        assert_eq!(content, SiteContent::default());
        assert_eq!(content.carousel.testimonial_auto_ms, 2600);
    }

    #[test]
    fn test_bad_interval_fails_at_load() {
        let err = SiteContent::from_json(
            r#"{"reservationHours":{"openTime":"11:30","closeTime":"22:00","intervalMinutes":0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().contains("positive number of minutes"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{"testimonials":[
            {"id":1,"name":"a","title":"t","text":"x","avatar":"/a.png"},
            {"id":1,"name":"b","title":"t","text":"y","avatar":"/b.png"}
        ]}"#;
        match SiteContent::from_json(json) {
            Err(ContentError::DuplicateId { section, id }) => {
                assert_eq!(section, "testimonials");
                assert_eq!(id, "1");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }
}
