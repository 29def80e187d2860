//! Input normalization applied before a submission leaves the client

use super::form_data::ContactFormData;

/// Trim free-text fields and normalize the email address.
///
/// Choice fields and the selected feature list pass through unchanged.
pub fn sanitize(form_data: &ContactFormData) -> ContactFormData {
    ContactFormData {
        project_brief: form_data.project_brief.trim().to_string(),
        company_name: form_data.company_name.trim().to_string(),
        company_website: form_data.company_website.trim().to_string(),
        reference_links: form_data.reference_links.trim().to_string(),
        full_name: form_data.full_name.trim().to_string(),
        email: form_data.email.trim().to_lowercase(),
        phone: form_data.phone.trim().to_string(),
        additional_features: form_data.additional_features.trim().to_string(),
        ..form_data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::fixtures::valid_form_data;
    use pretty_assertions::assert_eq;

    fn padded() -> ContactFormData {
        ContactFormData {
            project_brief: "  We need a shop for our furniture business. \n".to_string(),
            company_name: " Wood & Co ".to_string(),
            company_website: "\thttps://woodandco.com ".to_string(),
            reference_links: "  ".to_string(),
            full_name: "  Jane Doe".to_string(),
            email: "  Jane@WoodAndCo.COM  ".to_string(),
            phone: " +61 400 123 456 ".to_string(),
            additional_features: " stock sync ".to_string(),
            ..valid_form_data()
        }
    }

    #[test]
    fn test_trims_text_fields() {
        let clean = sanitize(&padded());
        assert_eq!(clean.project_brief, "We need a shop for our furniture business.");
        assert_eq!(clean.company_name, "Wood & Co");
        assert_eq!(clean.company_website, "https://woodandco.com");
        assert_eq!(clean.reference_links, "");
        assert_eq!(clean.full_name, "Jane Doe");
        assert_eq!(clean.phone, "+61 400 123 456");
        assert_eq!(clean.additional_features, "stock sync");
    }

    #[test]
    fn test_lowercases_and_trims_email() {
        let data = ContactFormData {
            email: "  A@B.COM  ".to_string(),
            ..valid_form_data()
        };
        assert_eq!(sanitize(&data).email, "a@b.com");
    }

    #[test]
    fn test_is_idempotent() {
        let once = sanitize(&padded());
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_leaves_choice_fields_and_features_untouched() {
        let data = ContactFormData {
            project_type: " cms ".to_string(),
            budget: "Not-Sure".to_string(),
            selected_features: vec![" seo ".to_string(), "blog".to_string()],
            ..valid_form_data()
        };
        let clean = sanitize(&data);
        assert_eq!(clean.project_type, " cms ");
        assert_eq!(clean.budget, "Not-Sure");
        assert_eq!(clean.timeline, data.timeline);
        assert_eq!(clean.best_time_to_contact, data.best_time_to_contact);
        assert_eq!(clean.selected_features, data.selected_features);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let data = padded();
        let before = data.clone();
        let _ = sanitize(&data);
        assert_eq!(data, before);
    }

    #[test]
    fn test_valid_data_is_a_fixed_point() {
        assert_eq!(sanitize(&valid_form_data()), valid_form_data());
    }
}
