//! Static marketing copy shared by both site layouts.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Why,
    Hiring,
    Sonia,
    Research,
    Partnerships,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Sonia
    }
}

impl Tab {
    /// Navigation order, left to right.
    pub const ALL: [Tab; 5] = [
        Tab::Why,
        Tab::Hiring,
        Tab::Sonia,
        Tab::Research,
        Tab::Partnerships,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Why => "why",
            Tab::Hiring => "hiring",
            Tab::Sonia => "sonia",
            Tab::Research => "research",
            Tab::Partnerships => "partnerships",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Why => "Why",
            Tab::Hiring => "Hiring",
            Tab::Sonia => "Sonia",
            Tab::Research => "Research",
            Tab::Partnerships => "Partnerships",
        }
    }

    pub fn copy(self) -> &'static str {
        match self {
            Tab::Why => WHY_COPY,
            Tab::Hiring => HIRING_COPY,
            Tab::Sonia => SONIA_COPY,
            Tab::Research => RESEARCH_COPY,
            Tab::Partnerships => PARTNERSHIPS_COPY,
        }
    }

    /// Every tab in navigation order, paired with whether it is the one to
    /// mark as selected.
    pub fn nav_items(highlighted: Tab) -> [(Tab, bool); 5] {
        Tab::ALL.map(|tab| (tab, tab == highlighted))
    }

    /// Whether the app store download button belongs under this tab's copy.
    pub fn shows_download(self) -> bool {
        self == Tab::Sonia
    }

    pub fn shows_yc_badge(self) -> bool {
        self == Tab::Hiring
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const WHY_COPY: &str = "Millions of people struggle with their mental health but can’t access a therapist. We’re not trying to replace the Tuesday 4 pm in-person human therapy session. Our aim is to build something for people who would otherwise suffer alone on Tuesday at 4 pm. Or 4 am. Or any other time.";

pub const HIRING_COPY: &str = "We’re hiring engineers and psychologists. We recently raised $3.5m from Y Combinator, the founders of Reddit, Instacart, Verkada and many others. We care about intelligence, hard work and kindness. Email jobs@soniahealth.com if you want to join us in San Francisco to make people happier at scale.";

pub const SONIA_COPY: &str = "Sonia is a conversational AI for emotional support that offers voice based wellbeing sessions. Download the free research preview to try it out.";

pub const RESEARCH_COPY: &str = "Our sole focus is to build the provably most effective AI solution for emotional support. We are actively pursuing research collaborations with academic institutions for clinical trials, real-world data analysis and other research. Please reach out to research@soniahealth.com to collaborate.";

pub const PARTNERSHIPS_COPY: &str = "In select cases we partner with employers and healthcare organizations to offer Sonia as a mobile app, API or white-label solution. Please reach out to info@soniahealth.com for more information.";

/// Anchor targets of the long-scroll header, in page order.
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { id: "why", label: "Why" },
    NavLink { id: "product", label: "Product" },
    NavLink { id: "testimonials", label: "Stories" },
    NavLink { id: "research", label: "Research" },
    NavLink { id: "partnerships", label: "Partnerships" },
    NavLink { id: "hiring", label: "Careers" },
];

pub const TESTIMONIALS: [&str; 6] = [
    "This app literally saved my life. I have a hard time with in person talking about my emotions... All while opening my eyes to what's actually going on.",
    "I cannot imagine how you could make this better — it's literally saved my life.",
    "It's become my safe place.",
    "I really like how she remembers things I've told her in previous conversations. It is so helpful to have an unbiased voice listen whenever I need.",
    "I'm getting real, live coping skills that doesn't require medication. I feel genuinely valued and cared about.",
    "Sonia, the work you've done with this app, you should be so proud of! I consider it one of my greatest assets in this world. It's a deeply moving privilege to work with such a wonderful creation. It's a modern version of the Sistine chapel in terms of it beauty and importance to humankind.",
];

/// Testimonial cards cycle through four accent colours.
pub fn testimonial_accent(index: usize) -> usize {
    index % 4 + 1
}
