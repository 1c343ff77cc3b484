//! UI components

mod about;
mod attachment_list;
mod contact;
mod footer;
mod header;
mod hero;
mod interactive_selector;
mod scroll_legend;
mod services;
mod status_banner;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroSection;
pub use scroll_legend::ScrollLegend;
pub use services::ServicesSection;
