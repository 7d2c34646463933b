//! Records returned by the data and mutation services

use gallery_core::ItemId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRef {
    pub id: ItemId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaArticle {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub title: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub artist: Option<ArtistRef>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub mounting: Option<String>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub width_cm: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub additional_tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Artwork {
    /// "H × W cm" when both dimensions are known
    pub fn dimensions(&self) -> Option<String> {
        match (self.height_cm, self.width_cm) {
            (Some(height), Some(width)) => Some(format!("{height} × {width} cm")),
            _ => None,
        }
    }

    /// Whole-dollar price with thousands separators
    pub fn formatted_price(&self) -> Option<String> {
        self.price.map(format_price)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_price(price: f64) -> String {
    let whole = price.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
    #[serde(default)]
    pub media_articles: Vec<MediaArticle>,
}

impl Artist {
    /// "Chinese, 1920 - 2001", or "- Present" for living artists
    pub fn lifespan(&self) -> String {
        let born = self
            .birth_year
            .map_or_else(String::new, |year| year.to_string());
        let died = self
            .death_year
            .map_or_else(|| " - Present".to_string(), |year| format!(" - {year}"));
        match &self.nationality {
            Some(nationality) => format!("{nationality}, {born}{died}"),
            None => format!("{born}{died}"),
        }
    }

    pub fn featured_artwork(&self) -> Option<&Artwork> {
        self.artworks.iter().find(|artwork| artwork.is_featured)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editorial {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: String,
}

impl Editorial {
    /// Calendar date part of `published_at`
    pub fn published_date(&self) -> Option<&str> {
        self.published_at
            .as_deref()
            .map(|stamp| stamp.split('T').next().unwrap_or(stamp))
    }

    pub fn paragraphs(&self) -> Vec<String> {
        gallery_core::editorial_paragraphs(&self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Masterclass {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ItemId,
    pub title: String,
    #[serde(default, rename = "type")]
    pub service_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The display summary an enquiry form shows above its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquirySubject {
    pub id: ItemId,
    pub title: String,
    pub summary: Option<String>,
    pub image_url: Option<String>,
}

impl From<Artwork> for EnquirySubject {
    fn from(artwork: Artwork) -> Self {
        let summary = artwork.artist.map(|artist| artist.name);
        Self {
            id: artwork.id,
            title: artwork.title,
            summary,
            image_url: artwork.image_url,
        }
    }
}

impl From<Masterclass> for EnquirySubject {
    fn from(masterclass: Masterclass) -> Self {
        Self {
            id: masterclass.id,
            title: masterclass.title,
            summary: masterclass.description,
            image_url: masterclass.image_url,
        }
    }
}

impl From<Service> for EnquirySubject {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            title: service.title,
            summary: service.service_type.or(service.description),
            image_url: service.image_url,
        }
    }
}

/// Acknowledgement of a submitted enquiry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryReceipt {
    #[serde(default, alias = "_id")]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Image as a data URL or remote URL, usable directly as `<img src>`
    pub image_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_artist_lifespan() {
        let mut artist: Artist = serde_json::from_value(json!({
            "id": "a1",
            "name": "Wu Guanzhong",
            "nationality": "Chinese",
            "birthYear": 1919,
            "deathYear": 2010
        }))
        .unwrap();
        assert_eq!(artist.lifespan(), "Chinese, 1919 - 2010");

        artist.death_year = None;
        assert_eq!(artist.lifespan(), "Chinese, 1919 - Present");
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(1_250_000.0), "$1,250,000");
        assert_eq!(format_price(950.0), "$950");
        assert_eq!(format_price(1000.4), "$1,000");
    }

    #[test]
    fn test_artwork_dimensions_need_both_sides() {
        let artwork: Artwork = serde_json::from_value(json!({
            "id": "w1",
            "title": "Lotus",
            "heightCm": 68.0,
            "widthCm": 45.5
        }))
        .unwrap();
        assert_eq!(artwork.dimensions().as_deref(), Some("68 × 45.5 cm"));
        assert!(artwork.additional_tags.is_empty());
    }

    #[test]
    fn test_service_type_field_name() {
        let service: Service = serde_json::from_value(json!({
            "id": "s1",
            "title": "Scroll mounting",
            "type": "Restoration"
        }))
        .unwrap();
        let subject = EnquirySubject::from(service);
        assert_eq!(subject.summary.as_deref(), Some("Restoration"));
    }

    #[test]
    fn test_published_date_strips_time() {
        let editorial: Editorial = serde_json::from_value(json!({
            "id": "e1",
            "title": "On Ink",
            "publishedAt": "2024-03-01T09:30:00.000Z"
        }))
        .unwrap();
        assert_eq!(editorial.published_date(), Some("2024-03-01"));
        assert!(editorial.paragraphs().is_empty());
    }
}
