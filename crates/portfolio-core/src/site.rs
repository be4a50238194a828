//! Bundled site content.
//!
//! Everything the page shows that does not come from the remote store: who
//! the site belongs to, how to reach them, the tech stack grid and the
//! certificate images shipped with the app.

use serde::{Deserialize, Serialize};

/// A certificate image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(rename = "Img")]
    pub img: String,
}

impl Certificate {
    pub fn new(img: impl Into<String>) -> Self {
        Self { img: img.into() }
    }
}

/// One tile of the tech stack grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub icon: String,
    pub language: String,
}

/// A social network profile link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub display_name: String,
    pub sub_text: String,
    pub url: String,
    /// Rendered as the wide card above the others
    pub primary: bool,
}

/// A contact card (email, phone, location).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub title: String,
    pub caption: String,
    pub value: String,
    pub href: String,
}

/// Identity and contact details of the site owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    pub owner: String,
    pub role: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub availability: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            owner: "Monu Prajapat".to_string(),
            role: "Full Stack Developer".to_string(),
            tagline: "MERN • AWS • DevOps • Web3".to_string(),
            email: "monuprajapat6270@gmail.com".to_string(),
            phone: "+91 9996105221".to_string(),
            location: "Karnal, Haryana".to_string(),
            availability: "Available Worldwide (Remote)".to_string(),
        }
    }
}

impl SiteProfile {
    /// First name, used by the welcome screen.
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }

    /// Everything after the first name.
    pub fn last_name(&self) -> &str {
        self.owner
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim())
            .unwrap_or("")
    }

    /// Footer sub-line.
    pub fn footer_line(&self) -> String {
        format!("{} | {}", self.role, self.tagline)
    }

    pub fn contact_channels(&self) -> Vec<ContactChannel> {
        let phone_digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        let map_query = self.location.replace(", ", "+").replace(' ', "+");

        vec![
            ContactChannel {
                title: "Email Address".to_string(),
                caption: "Let's connect via email".to_string(),
                value: self.email.clone(),
                href: format!("mailto:{}", self.email),
            },
            ContactChannel {
                title: "Phone Number".to_string(),
                caption: "Available for calls".to_string(),
                value: self.phone.clone(),
                href: format!("tel:{}", phone_digits),
            },
            ContactChannel {
                title: "Location".to_string(),
                caption: self.availability.clone(),
                value: self.location.clone(),
                href: format!(
                    "https://www.google.com/maps/search/?api=1&query={}",
                    map_query
                ),
            },
        ]
    }

    /// Pre-filled mail link for the "Schedule a Call" quick action.
    pub fn schedule_call_href(&self) -> String {
        format!("mailto:{}?subject=Let's Schedule a Call", self.email)
    }
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "LinkedIn".to_string(),
            display_name: "Let's Connect".to_string(),
            sub_text: "on LinkedIn".to_string(),
            url: "https://www.linkedin.com/in/monuprajapat/".to_string(),
            primary: true,
        },
        SocialLink {
            name: "GitHub".to_string(),
            display_name: "Github".to_string(),
            sub_text: "@monuprajapat".to_string(),
            url: "https://github.com/monuprajapat".to_string(),
            primary: false,
        },
        SocialLink {
            name: "Instagram".to_string(),
            display_name: "Instagram".to_string(),
            sub_text: "@monu__prajapat".to_string(),
            url: "https://www.instagram.com/monu__prajapat/".to_string(),
            primary: false,
        },
    ]
}

/// Certificate images shipped with the app.
pub fn local_certificates() -> Vec<Certificate> {
    [
        "/courses/blockchain.png",
        "/courses/machineLearning.png",
        "/courses/pythonBasics.png",
        "/courses/frontendDevelopment.png",
        "/courses/javaForAndroid.png",
    ]
    .into_iter()
    .map(Certificate::new)
    .collect()
}

const DEVICON: &str = "https://raw.githubusercontent.com/devicons/devicon/master/icons";
const VECTORLOGO: &str = "https://www.vectorlogo.zone/logos";

pub fn tech_stacks() -> Vec<TechStack> {
    let entries: [(String, &str); 26] = [
        (format!("{DEVICON}/html5/html5-original-wordmark.svg"), "HTML5"),
        (format!("{DEVICON}/css3/css3-original-wordmark.svg"), "CSS3"),
        (format!("{DEVICON}/javascript/javascript-original.svg"), "JavaScript"),
        (format!("{VECTORLOGO}/tailwindcss/tailwindcss-icon.svg"), "Tailwind"),
        (format!("{DEVICON}/react/react-original-wordmark.svg"), "React"),
        (format!("{DEVICON}/nodejs/nodejs-original-wordmark.svg"), "Node.js"),
        (format!("{DEVICON}/express/express-original-wordmark.svg"), "Express.js"),
        (format!("{DEVICON}/mongodb/mongodb-original-wordmark.svg"), "MongoDB"),
        (format!("{DEVICON}/mysql/mysql-original-wordmark.svg"), "MySQL"),
        (format!("{DEVICON}/postgresql/postgresql-original-wordmark.svg"), "PostgreSQL"),
        (
            format!("{DEVICON}/amazonwebservices/amazonwebservices-original-wordmark.svg"),
            "AWS",
        ),
        (format!("{DEVICON}/docker/docker-original-wordmark.svg"), "Docker"),
        (format!("{VECTORLOGO}/kubernetes/kubernetes-icon.svg"), "Kubernetes"),
        (format!("{DEVICON}/bootstrap/bootstrap-plain-wordmark.svg"), "Bootstrap"),
        (format!("{DEVICON}/typescript/typescript-original.svg"), "TypeScript"),
        (format!("{DEVICON}/redux/redux-original.svg"), "Redux"),
        (format!("{DEVICON}/sass/sass-original.svg"), "Sass"),
        (format!("{DEVICON}/webpack/webpack-original-wordmark.svg"), "Webpack"),
        (format!("{VECTORLOGO}/graphql/graphql-icon.svg"), "GraphQL"),
        (format!("{VECTORLOGO}/getpostman/getpostman-icon.svg"), "Postman"),
        (format!("{VECTORLOGO}/jenkins/jenkins-icon.svg"), "Jenkins"),
        (format!("{VECTORLOGO}/jestjsio/jestjsio-icon.svg"), "Jest"),
        (
            "https://raw.githubusercontent.com/detain/svg-logos/780f25886640cef088af994181646db2f6b1a3f8/svg/selenium-logo.svg".to_string(),
            "Selenium",
        ),
        (format!("{DEVICON}/c/c-original.svg"), "C"),
        (format!("{DEVICON}/cplusplus/cplusplus-original.svg"), "C++"),
        (
            "https://upload.wikimedia.org/wikipedia/commons/d/d1/Ionic_Logo.svg".to_string(),
            "Ionic",
        ),
    ];

    entries
        .into_iter()
        .map(|(icon, language)| TechStack {
            icon,
            language: language.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_name_parts() {
        let profile = SiteProfile::default();
        assert_eq!(profile.first_name(), "Monu");
        assert_eq!(profile.last_name(), "Prajapat");

        let single = SiteProfile {
            owner: "Cher".to_string(),
            ..SiteProfile::default()
        };
        assert_eq!(single.first_name(), "Cher");
        assert_eq!(single.last_name(), "");
    }

    #[test]
    fn contact_channel_links() {
        let channels = SiteProfile::default().contact_channels();
        assert_eq!(channels.len(), 3);
        assert_eq!(channels[0].href, "mailto:monuprajapat6270@gmail.com");
        assert_eq!(channels[1].href, "tel:+919996105221");
        assert!(channels[2].href.ends_with("query=Karnal+Haryana"));
    }

    #[test]
    fn exactly_one_primary_social_link() {
        let links = social_links();
        assert_eq!(links.iter().filter(|l| l.primary).count(), 1);
        assert_eq!(links[0].name, "LinkedIn");
    }

    #[test]
    fn bundled_lists() {
        assert_eq!(local_certificates().len(), 5);
        let stacks = tech_stacks();
        assert_eq!(stacks.len(), 26);
        assert_eq!(stacks[0].language, "HTML5");
        assert!(stacks.iter().all(|s| s.icon.starts_with("https://")));
    }

    #[test]
    fn certificate_uses_store_field_name() {
        let json = serde_json::to_string(&Certificate::new("/a.png")).unwrap();
        assert_eq!(json, r#"{"Img":"/a.png"}"#);
    }
}
