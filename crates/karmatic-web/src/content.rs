//! Static copy and media paths rendered by the site.

pub const LOGO_PATH: &str = "/Images/Karmatic Painting Logo.svg";
pub const BUSINESS_NAME: &str = "Karmatic Painting";

pub const PHONE_DISPLAY: &str = "(403) 542-7553";
pub const PHONE_HREF: &str = "tel:+14035427553";
pub const EMAIL: &str = "karmaticpainting@gmail.com";
pub const SERVICE_AREA: &str = "Calgary & Surrounding Areas";

/// Page section, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

pub const SECTIONS: [Section; 4] = [
    Section { id: "home", label: "Home", glyph: "⌂" },
    Section { id: "services", label: "Services", glyph: "🖌" },
    Section { id: "about", label: "About", glyph: "ℹ" },
    Section { id: "contact", label: "Contact", glyph: "✉" },
];

pub fn section_ids() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().map(|section| section.id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub glyph: &'static str,
}

pub const SLIDES: [Slide; karmatic_core::carousel::TOTAL_SLIDES] = [
    Slide {
        title: "Interior Painting",
        description: "Transform your living spaces",
        image: "/Gallery/img_0145.png",
        glyph: "🖌",
    },
    Slide {
        title: "Cabinet Refinishing",
        description: "Stunning kitchen makeovers",
        image: "/Gallery/img_0153.png",
        glyph: "🎨",
    },
    Slide {
        title: "Exterior Painting",
        description: "Boost your curb appeal",
        image: "/Gallery/img_0160.png",
        glyph: "⌂",
    },
    Slide {
        title: "Wood Finishing",
        description: "Premium wood treatments",
        image: "/Gallery/img_7704.png",
        glyph: "🪵",
    },
    Slide {
        title: "Specialty Finishes",
        description: "Unique decorative touches",
        image: "/Gallery/img_7870.png",
        glyph: "✨",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES_SUBTITLE: &str =
    "Comprehensive painting and finishing solutions tailored to your needs";

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Painting",
        description: "Professional interior and exterior painting services with premium quality finishes that transform your space.",
        image: "/Services Images/Paint Can.png",
    },
    Service {
        title: "Cabinet Transformations",
        description: "Breathe new life into your kitchen and bathroom cabinets with expert refinishing and color updates.",
        image: "/Services Images/Cabinet.png",
    },
    Service {
        title: "Wood Finishing",
        description: "Custom wood staining, sealing, and finishing services to enhance and protect your woodwork.",
        image: "/Services Images/Wood Finishing.png",
    },
    Service {
        title: "Wallpaper",
        description: "Professional wallpaper installation and removal services to create stunning accent walls and complete room makeovers.",
        image: "/Services Images/Wallpaper.png",
    },
];

pub const ABOUT_HEADING: &str = "Why Choose Karmatic Painting?";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "My name is Kevin, and I have been painting for 46 years. When you hire me, it is just me in your home, doing the work myself and making sure it is done properly.",
    "I care about the details and only use products I trust. Every wall, cabinet, piece of wood and roll of wallpaper gets the same care I would want in my own home.",
];

pub const ABOUT_POINTS: [&str; 6] = [
    "Licensed and insured",
    "46 years of hands-on experience",
    "High quality products and clean finishes",
    "Careful prep and attention to detail",
    "Clear pricing and communication",
    "I am not finished until you are happy",
];

pub const PROMISE_HEADING: &str = "My Promise to You";

pub const PROMISE_PARAGRAPHS: [&str; 3] = [
    "My promise is simple. I will not rush your project or leave something I know could look better. You get my full attention from the first visit to the final coat of paint.",
    "Whether you need painting, cabinet transformations, wood finishing or wallpaper, I want you to be proud every time you walk into the room.",
    "Your home matters to me, and I will give you results you feel good about inviting people over to see.",
];

pub const CONTACT_SUBTITLE: &str =
    "Ready to transform your space? Contact me today to see if we are a good fit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCard {
    pub title: &'static str,
    pub value: &'static str,
    pub glyph: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_CARDS: [ContactCard; 3] = [
    ContactCard {
        title: "Phone",
        value: PHONE_DISPLAY,
        glyph: "☎",
        href: Some(PHONE_HREF),
    },
    ContactCard {
        title: "Email",
        value: EMAIL,
        glyph: "✉",
        href: Some("mailto:karmaticpainting@gmail.com"),
    },
    ContactCard {
        title: "Location",
        value: SERVICE_AREA,
        glyph: "📍",
        href: None,
    },
];

pub const FOOTER_TAGLINE: &str = "Professional Painting & Finishing Services";

pub fn copyright_notice(year: i32) -> String {
    format!("© {year} {BUSINESS_NAME}. All rights reserved.")
}
