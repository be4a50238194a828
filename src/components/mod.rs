//! Page sections and cards for the portfolio.

mod about;
mod certificate_card;
mod contact_section;
mod footer;
mod hero;
mod navbar;
mod project_card;
mod showcase;
mod social_links;
mod tech_stack;
mod welcome_screen;

pub use about::About;
pub use certificate_card::CertificateCard;
pub use contact_section::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use showcase::Showcase;
pub use social_links::SocialLinks;
pub use tech_stack::TechStackIcon;
pub use welcome_screen::WelcomeScreen;
