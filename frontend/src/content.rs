// Everything the page shows lives here as compiled-in statics. Sections only
// read from this module.

pub const BRAND: &str = "Marvin B. Solutions";

/// Anchor ids of the page sections.
pub mod section {
    pub const HOME: &str = "home";
    pub const WORK: &str = "work";
    pub const PROCESS: &str = "process";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";
}

/// Names of the fields the contact form posts.
pub mod field {
    pub const FORM_NAME: &str = "form-name";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PROJECT: &str = "project";
    pub const MESSAGE: &str = "message";
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub url: &'static str,
    pub role: &'static str,
    pub stack: &'static [&'static str],
    pub outcomes: &'static [&'static str],
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "house-of-fades",
        title: "House of Fades — Barbershop",
        blurb: "Booking-first site with modern dark theme and service cards.",
        tags: &["Local Service", "Tailwind", "Netlify"],
        image: "https://mb-solutions.s3.dualstack.us-east-1.amazonaws.com/assets/House-of-Fades.png",
        url: "https://stupendous-paprenjak-b3682f.netlify.app/",
        role: "Design, Build, Deploy",
        stack: &["HTML", "CSS", "Tailwind", "Netlify"],
        outcomes: &[
            "+48% clicks from Google Maps",
            "Sub-1s LCP on 4G",
            "2x bookings within 60 days",
        ],
    },
    Project {
        id: "a1-masonry",
        title: "A-1 Masonry LLC — Trades",
        blurb: "SEO-friendly static site with form + gallery.",
        tags: &["Trades", "SEO", "Static"],
        image: "https://mb-solutions.s3.dualstack.us-east-1.amazonaws.com/assets/A1-Masonry.png",
        url: "https://www.a-1masonry.llc/",
        role: "Design, Build",
        stack: &["W3.CSS", "Netlify Forms"],
        outcomes: &[
            "PageSpeed 95+ mobile",
            "Ranked for 3 local keywords",
            "Leads from contact form week 1",
        ],
    },
    Project {
        id: "Restaurant-example",
        title: "Restaurant Example — Dining",
        blurb: "Vibrant landing with menu highlights and hours.",
        tags: &["Restaurant", "Mobile-first"],
        image: "https://mb-solutions.s3.dualstack.us-east-1.amazonaws.com/assets/The%20Resturant.png",
        url: "https://charcoal-dining.netlify.app/",
        role: "Design, Build",
        stack: &["Next.js", "Tailwind"],
        outcomes: &["Bounce rate ↓ 23%", "Organic impressions ↑", "Menu views ↑ 3x"],
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Julio V.",
        role: "Owner, House of Fades",
        quote: "He made the site fast and simple for clients to book. We started getting more calls the same week.",
    },
    Testimonial {
        name: "Ana R.",
        role: "La Ruta Food Truck",
        quote: "Clean design, easy updates, and our menu finally looks great on phones.",
    },
];

pub static NAV: &[NavLink] = &[
    NavLink { id: section::HOME, label: "Home" },
    NavLink { id: section::WORK, label: "Work" },
    NavLink { id: section::PROCESS, label: "Process" },
    NavLink { id: section::ABOUT, label: "About" },
    NavLink { id: section::CONTACT, label: "Contact" },
];

/// Used by the "Book a call" and "Let's talk" buttons.
pub static CONTACT_LINK: NavLink = NavLink { id: section::CONTACT, label: "Book a call" };

pub static PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Discover",
        text: "Quick call to understand goals, audience, and required features.",
    },
    ProcessStep {
        title: "Design",
        text: "Wireframe + style direction. Fast iterations with your feedback.",
    },
    ProcessStep {
        title: "Build",
        text: "Accessible, responsive site with SEO and analytics baked in.",
    },
    ProcessStep {
        title: "Launch",
        text: "Deploy to Netlify with custom domain + SSL and performance checks.",
    },
];

pub static HERO_HIGHLIGHTS: &[&str] = &["Fast load times", "SEO foundations", "Mobile-first"];
pub const HERO_IMAGE: &str =
    "https://mb-solutions.s3.dualstack.us-east-1.amazonaws.com/assets/Marvin%20B.%20Solutions.png";
pub static HERO_TAGS: &[&str] = &["Next.js", "Tailwind", "Netlify"];

pub static ABOUT_FACTS: &[Fact] = &[
    Fact { label: "Services", value: "Websites, SEO, Maintenance" },
    Fact { label: "Stack", value: "Next.js, Tailwind, Netlify" },
    Fact { label: "Turnaround", value: "1–2 weeks for most sites" },
    Fact { label: "Support", value: "Email + Loom walkthroughs" },
];

pub static CONTACT_DETAILS: &[&str] = &[
    "hello@mbsolutionslab.com",
    "github.com/your-handle",
    "Hickory, NC (Remote-friendly)",
];

/// Field names posted by the contact form. `index.html` keeps a static copy
/// of the form with the same names so the form host can register it.
#[cfg(test)]
pub static CONTACT_FORM_FIELDS: &[&str] = &[
    field::FORM_NAME,
    field::NAME,
    field::EMAIL,
    field::PROJECT,
    field::MESSAGE,
];

pub static FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { label: "GitHub", href: "https://github.com/your-handle", external: true },
    FooterLink { label: "Digital Dialogue", href: "#", external: false },
    FooterLink { label: "Contact", href: "#contact", external: false },
];

#[cfg(test)]
pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
