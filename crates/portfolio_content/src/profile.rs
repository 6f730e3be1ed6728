use serde::{Deserialize, Serialize};

use crate::ContentError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub years: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A labelled group of skill tags.
pub struct SkillGroup {
    pub label: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Header block of the profile window.
pub struct Profile {
    pub name: String,
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Contact window copy and outbound links.
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    pub linkedin_url: String,
}

impl Contact {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A named location pinned on the world map, positioned in percent of the map's box.
pub struct MapPin {
    pub id: String,
    pub name: String,
    pub x_pct: f64,
    pub y_pct: f64,
}

impl MapPin {
    /// Inline style placing the pin over the map image.
    pub fn style(&self) -> String {
        format!(
            "left:{}%;top:{}%;",
            self.x_pct.clamp(0.0, 100.0),
            self.y_pct.clamp(0.0, 100.0)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMap {
    pub map_image: String,
    #[serde(default)]
    pub pins: Vec<MapPin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Everything the non-project windows render.
pub struct ProfileContent {
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub awards: Vec<Award>,
    pub contact: Contact,
    pub location: LocationMap,
}

impl ProfileContent {
    /// Decodes profile content from the build-time JSON shape.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Profile`] when the JSON does not match.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(ContentError::Profile)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MINIMAL: &str = r#"{
        "schema_version": 1,
        "profile": { "name": "N", "title": "T", "intro": "I" },
        "contact": { "heading": "H", "blurb": "B", "email": "a@b.c", "linkedin_url": "https://l" },
        "location": { "map_image": "/map.png" }
    }"#;

    #[test]
    fn optional_sections_default_to_empty() {
        let content = ProfileContent::from_json(MINIMAL).expect("minimal profile");
        assert_eq!(content.profile.photo, None);
        assert!(content.profile.education.is_empty());
        assert!(content.experience.is_empty());
        assert!(content.awards.is_empty());
        assert!(content.location.pins.is_empty());
    }

    #[test]
    fn mailto_href_prefixes_email() {
        let content = ProfileContent::from_json(MINIMAL).expect("minimal profile");
        assert_eq!(content.contact.mailto_href(), "mailto:a@b.c");
    }

    #[test]
    fn pin_style_clamps_to_map_box() {
        let pin = MapPin {
            id: "x".to_string(),
            name: "X".to_string(),
            x_pct: 120.0,
            y_pct: 40.5,
        };
        assert_eq!(pin.style(), "left:100%;top:40.5%;");
    }

    #[test]
    fn missing_contact_is_a_profile_error() {
        let err = ProfileContent::from_json(r#"{"profile": {"name": "N", "title": "T", "intro": "I"}}"#)
            .expect_err("incomplete");
        assert!(matches!(err, ContentError::Profile(_)));
    }
}
