//! Shared test data for form and submission tests

use super::form_data::ContactFormData;

/// Form data that passes every field constraint
pub fn valid_form_data() -> ContactFormData {
    ContactFormData {
        project_type: "ecommerce".to_string(),
        selected_features: vec!["payment-gateway".to_string(), "product-catalog".to_string()],
        additional_features: String::new(),
        budget: "2k-4k".to_string(),
        timeline: "2-4-weeks".to_string(),
        project_brief: "We need an online store for handmade furniture with payment integration."
            .to_string(),
        company_name: "Wood & Co".to_string(),
        company_website: "https://woodandco.com".to_string(),
        reference_links: String::new(),
        full_name: "Jane Doe".to_string(),
        email: "jane@woodandco.com".to_string(),
        phone: "+61 400 123 456".to_string(),
        best_time_to_contact: "morning".to_string(),
    }
}
