//! Static configuration of the quote form: steps and feature checklists

use super::field::FieldName;
use super::options::ProjectType;

/// A checklist entry offered on step 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureOption {
    pub id: &'static str,
    pub label: &'static str,
}

const fn feature(id: &'static str, label: &'static str) -> FeatureOption {
    FeatureOption { id, label }
}

const ECOMMERCE_FEATURES: &[FeatureOption] = &[
    feature("product-catalog", "Product catalog with categories"),
    feature("shopping-cart", "Shopping cart functionality"),
    feature("payment-gateway", "Payment gateway integration (Stripe, PayPal)"),
    feature("inventory", "Inventory management"),
    feature("user-accounts", "User accounts and order history"),
    feature("shipping", "Shipping calculator and integrations"),
    feature("reviews", "Product reviews and ratings"),
    feature("wishlist", "Wishlist functionality"),
    feature("mobile-app", "Mobile app (iOS/Android)"),
];

const LANDING_PAGE_FEATURES: &[FeatureOption] = &[
    feature("hero-section", "Hero section with call-to-action"),
    feature("contact-form", "Contact form integration"),
    feature("testimonials", "Customer testimonials section"),
    feature("pricing-table", "Pricing table"),
    feature("newsletter", "Newsletter signup"),
    feature("analytics", "Analytics and tracking (Google Analytics, etc.)"),
    feature("social-proof", "Social proof and trust badges"),
    feature("video-bg", "Video background or multimedia"),
];

const CMS_FEATURES: &[FeatureOption] = &[
    feature("blog", "Blog with categories and tags"),
    feature("search", "Search functionality"),
    feature("comments", "Comment system"),
    feature("seo", "SEO optimization tools"),
    feature("multi-author", "Multi-author support"),
    feature("media-library", "Media library and management"),
    feature("scheduling", "Content scheduling"),
    feature("rss", "RSS feeds"),
    feature("multilingual", "Multi-language support"),
];

const PORTFOLIO_FEATURES: &[FeatureOption] = &[
    feature("project-showcase", "Project showcase with filtering"),
    feature("image-gallery", "Image gallery with lightbox"),
    feature("case-studies", "Detailed case studies"),
    feature("resume", "Downloadable resume/CV"),
    feature("testimonials", "Client testimonials"),
    feature("contact-form", "Contact form"),
    feature("blog", "Blog section"),
    feature("animations", "Animations and transitions"),
];

const CUSTOM_FEATURES: &[FeatureOption] = &[
    feature("custom-ui", "Custom UI/UX design"),
    feature("api-integration", "Third-party API integrations"),
    feature("real-time", "Real-time features (WebSockets, etc.)"),
    feature("database", "Complex database architecture"),
    feature("authentication", "User authentication and authorization"),
    feature("dashboard", "Admin dashboard"),
    feature("reporting", "Reporting and analytics"),
    feature("mobile-responsive", "Mobile responsive design"),
    feature("pwa", "Progressive Web App (PWA)"),
];

const NOT_SURE_FEATURES: &[FeatureOption] = &[
    feature("online-presence", "I need an online presence"),
    feature("sell-products", "I want to sell products/services online"),
    feature("share-content", "I want to share content regularly"),
    feature("showcase-work", "I want to showcase my work"),
    feature("booking", "I need booking/scheduling functionality"),
    feature("membership", "I need a membership site"),
    feature("help-decide", "I need help deciding what I need"),
];

/// Feature checklist for a project type
pub fn features_for(project_type: ProjectType) -> &'static [FeatureOption] {
    match project_type {
        ProjectType::Ecommerce => ECOMMERCE_FEATURES,
        ProjectType::LandingPage => LANDING_PAGE_FEATURES,
        ProjectType::Cms => CMS_FEATURES,
        ProjectType::Portfolio => PORTFOLIO_FEATURES,
        ProjectType::Custom => CUSTOM_FEATURES,
        ProjectType::NotSure => NOT_SURE_FEATURES,
    }
}

/// Feature checklist for a raw project type value; empty until one is chosen
pub fn features_for_raw(project_type: &str) -> &'static [FeatureOption] {
    project_type
        .parse::<ProjectType>()
        .map(features_for)
        .unwrap_or(&[])
}

/// Resolve a feature id to its label, falling back to the id itself
pub fn feature_label(id: &str) -> &str {
    ProjectType::ALL
        .into_iter()
        .flat_map(|t| features_for(t).iter())
        .find(|f| f.id == id)
        .map(|f| f.label)
        .unwrap_or(id)
}

/// One screen of the wizard
#[derive(Debug, Clone, Copy)]
pub struct FormStep {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// Inputs shown on this step, in display order
    pub fields: &'static [FieldName],
}

pub const FORM_STEPS: [FormStep; 5] = [
    FormStep {
        id: 1,
        title: "Project Type",
        description: "What type of project are you looking for?",
        fields: &[FieldName::ProjectType],
    },
    FormStep {
        id: 2,
        title: "Features & Requirements",
        description: "What features do you need?",
        fields: &[FieldName::SelectedFeatures, FieldName::AdditionalFeatures],
    },
    FormStep {
        id: 3,
        title: "Project Details",
        description: "Tell us more about your project",
        fields: &[
            FieldName::Budget,
            FieldName::Timeline,
            FieldName::ProjectBrief,
            FieldName::CompanyName,
            FieldName::CompanyWebsite,
            FieldName::ReferenceLinks,
        ],
    },
    FormStep {
        id: 4,
        title: "Contact Information",
        description: "How can we reach you?",
        fields: &[
            FieldName::FullName,
            FieldName::Email,
            FieldName::Phone,
            FieldName::BestTimeToContact,
        ],
    },
    FormStep {
        id: 5,
        title: "Review & Submit",
        description: "Review your information before submitting",
        fields: &[],
    },
];

/// First and last wizard step numbers
pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = FORM_STEPS.len() as u8;

/// Look up a step by its 1-based number
pub fn form_step(step: u8) -> Option<&'static FormStep> {
    FORM_STEPS.iter().find(|s| s.id == step)
}

/// Option (value, label) pairs for a choice field, in display order
pub fn choice_options(field: FieldName) -> Vec<(&'static str, &'static str)> {
    use super::options::{BudgetRange, ContactTime, Timeline};

    match field {
        FieldName::ProjectType => ProjectType::ALL
            .iter()
            .map(|v| (v.as_str(), v.label()))
            .collect(),
        FieldName::Budget => BudgetRange::ALL
            .iter()
            .map(|v| (v.as_str(), v.label()))
            .collect(),
        FieldName::Timeline => Timeline::ALL
            .iter()
            .map(|v| (v.as_str(), v.label()))
            .collect(),
        FieldName::BestTimeToContact => ContactTime::ALL
            .iter()
            .map(|v| (v.as_str(), v.label()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Display label of a choice field's raw value ("Not provided" for the sentinel)
pub fn choice_label(field: FieldName, raw: &str) -> &str {
    if raw.is_empty() {
        return "Not provided";
    }
    choice_options(field)
        .into_iter()
        .find(|(value, _)| *value == raw)
        .map(|(_, label)| label)
        .unwrap_or(raw)
}
