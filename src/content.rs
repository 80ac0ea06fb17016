use log::error;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub about: About,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub tech: Vec<Tech>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub clients: Vec<Client>,
    pub contact: ContactDetails,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub company: String,
    pub short: String,
    pub tagline: String,
    pub motto: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct About {
    pub intro: String,
    #[serde(default)]
    pub mission: Vec<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    /// SVG path data for a 24x24 stroke icon.
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Tech {
    pub name: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub demo_url: String,
    pub icon: String,
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_accent() -> String {
    "blue".to_string()
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Client {
    pub name: String,
    pub detail: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
}

pub fn parse(json: &str) -> Result<SiteContent, serde_json::Error> {
    serde_json::from_str(json)
}

/// Site copy bundled at build time. A broken document renders an empty page
/// shell rather than panicking.
pub fn load() -> SiteContent {
    match parse(SITE_JSON) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to parse site content: {}", e);
            SiteContent::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = parse(SITE_JSON).expect("bundled site.json should parse");
        assert_eq!(content.brand.name, "DevLab");
        assert_eq!(content.about.expertise.len(), 5);
        assert_eq!(content.services.len(), 3);
        assert_eq!(content.projects.len(), 4);
        assert!(!content.tech.is_empty());
        assert!(!content.clients.is_empty());
    }

    #[test]
    fn demo_links_are_https() {
        let content = load();
        for project in &content.projects {
            assert!(project.demo_url.starts_with("https://"), "{}", project.title);
            assert!(!project.tags.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn optional_lists_and_accent_have_defaults() {
        let json = r#"{
            "brand": { "name": "X", "company": "Y", "short": "Z", "tagline": "t", "motto": "m" },
            "about": { "intro": "i" },
            "projects": [
                { "title": "P", "description": "d", "demo_url": "https://p", "icon": "M0 0" }
            ],
            "contact": { "email": "e", "phone": "p", "location": "l" }
        }"#;
        let content = parse(json).unwrap();
        assert!(content.services.is_empty());
        assert!(content.about.mission.is_empty());
        assert_eq!(content.projects[0].accent, "blue");
        assert!(content.projects[0].tags.is_empty());
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(parse("{ \"brand\": 3 }").is_err());
    }
}
