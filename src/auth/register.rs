use askama_axum::{IntoResponse, Template};
use axum::{http::HeaderMap, response::Response};
use tracing::debug;

use crate::general::{
    divider::DividerBlock,
    icon::IconBlock,
    layout::{is_htmx_request, LayoutPage},
};

/// Suggestions offered for the industry field
pub const INDUSTRIES: [&str; 4] = [
    "Distribution",
    "Beverage manufacturer",
    "Marketing",
    "Regulatory",
];

const INDUSTRIES_LIST_ID: &str = "datalist_id";

#[derive(Clone, Debug)]
pub struct Datalist {
    id: &'static str,
    options: &'static [&'static str],
}

/// Labelled input of the form, its name is also used as the element id
#[derive(Clone, Debug, Template)]
#[template(path = "auth/form_field.html")]
pub struct FormField {
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    required: bool,
    supporting_text: &'static str,
    datalist: Option<Datalist>,
}

impl FormField {
    fn new(label: &'static str, name: &'static str, input_type: &'static str) -> Self {
        Self {
            label,
            name,
            input_type,
            required: false,
            supporting_text: " ",
            datalist: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn with_datalist(mut self, id: &'static str, options: &'static [&'static str]) -> Self {
        self.datalist = Some(Datalist { id, options });
        self
    }
}

/// Template
/// Card with the account creation form, swapped into the page body
#[derive(Template)]
#[template(path = "auth/register_page.html")]
pub struct RegisterPage {
    close_icon: IconBlock,
    logo_icon: IconBlock,
    google_icon: IconBlock,
    submit_icon: IconBlock,
    divider: DividerBlock,
    first_name: FormField,
    last_name: FormField,
    email: FormField,
    company: FormField,
    industry: FormField,
}

impl RegisterPage {
    pub fn empty() -> Self {
        Self {
            close_icon: IconBlock::named("cancel"),
            logo_icon: IconBlock::named("logo"),
            google_icon: IconBlock::named("G"),
            submit_icon: IconBlock::named("user_plus"),
            divider: DividerBlock::from("or"),
            first_name: FormField::new("First Name", "first_name", "text").required(),
            last_name: FormField::new("Last Name", "last_name", "text").required(),
            email: FormField::new("Email", "email", "email").required(),
            company: FormField::new("Company", "company", "text").required(),
            industry: FormField::new("Industry", "industry", "text")
                .with_datalist(INDUSTRIES_LIST_ID, &INDUSTRIES),
        }
    }
}

/// Get handler
/// Returns the empty registration form, the submission is handled by the POST on the same path
/// Requests not issued by htmx get the form inside the full document
pub async fn get_handler(headers: HeaderMap) -> Response {
    let page = RegisterPage::empty();

    if is_htmx_request(&headers) {
        debug!("Rendering registration form fragment");
        page.into_response()
    } else {
        debug!("Rendering registration form page");
        LayoutPage::from("Create Account", page).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        RegisterPage::empty().render().unwrap()
    }

    /// Opening tag of the element carrying the given name attribute
    fn tag_with_name<'a>(html: &'a str, name: &str) -> &'a str {
        let attribute = format!(r#"name="{}""#, name);
        let position = html
            .find(&attribute)
            .unwrap_or_else(|| panic!("no element named {}", name));
        let start = html[..position].rfind('<').unwrap();
        let end = position + html[position..].find('>').unwrap();

        &html[start..=end]
    }

    #[test]
    fn contains_a_single_form_posting_to_register() {
        let html = render();

        assert_eq!(html.matches("<form").count(), 1);
        assert_eq!(html.matches(r#"type="submit""#).count(), 1);

        let submit_start = html.find(r#"type="submit""#).unwrap();
        let submit_tag = &html[html[..submit_start].rfind('<').unwrap()..];
        let submit_tag = &submit_tag[..=submit_tag.find('>').unwrap()];
        assert!(submit_tag.contains(r#"hx-post="/register""#));
        assert!(submit_tag.contains(r#"hx-target="body""#));
    }

    #[test]
    fn form_submits_natively_as_post() {
        let html = render();

        assert!(html.contains(r#"<form method="post" action="/register">"#));
    }

    #[test]
    fn google_button_is_an_inert_placeholder() {
        let html = render();

        let end = html.find("Sign up with Google").unwrap();
        let tag = &html[html[..end].rfind("<button").unwrap()..end];
        let tag = &tag[..=tag.find('>').unwrap()];
        assert!(tag.contains(r#"type="button""#));
        assert!(!tag.contains("hx-"));
        assert!(!tag.contains("onclick"));
    }

    #[test]
    fn icons_come_from_the_sprite_sheet() {
        let html = render();

        for name in ["cancel", "logo", "G", "user_plus"] {
            assert!(html.contains(&format!(r##"href="/static/icons.svg#{}""##, name)));
        }
    }

    #[test]
    fn lists_the_four_industries() {
        let html = render();

        assert_eq!(html.matches("<option").count(), 4);
        for industry in INDUSTRIES {
            assert!(html.contains(&format!(r#"<option value="{}">"#, industry)));
        }
        assert!(html.contains(r#"<datalist id="datalist_id">"#));
        assert!(tag_with_name(&html, "industry").contains(r#"list="datalist_id""#));
    }

    #[test]
    fn marks_fields_required_except_industry() {
        let html = render();

        for name in ["first_name", "last_name", "email", "company", "password", "terms"] {
            assert!(
                tag_with_name(&html, name).contains(" required"),
                "{} should be required",
                name
            );
        }
        assert!(!tag_with_name(&html, "industry").contains("required"));
    }

    #[test]
    fn uses_native_input_types() {
        let html = render();

        assert!(tag_with_name(&html, "email").contains(r#"type="email""#));
        assert!(tag_with_name(&html, "password").contains(r#"type="password""#));
        assert!(tag_with_name(&html, "terms").contains(r#"type="checkbox""#));
    }

    #[test]
    fn close_button_goes_back_home_with_partial_update() {
        let html = render();

        let start = html.find(r#"class="icon-button close-button""#).unwrap();
        let tag = &html[html[..start].rfind('<').unwrap()..];
        let tag = &tag[..=tag.find('>').unwrap()];
        assert!(tag.contains(r#"hx-get="/""#));
        assert!(tag.contains(r#"hx-target="body""#));
        assert!(tag.contains(r#"aria-label="Close""#));
    }

    #[test]
    fn password_hint_is_static_text() {
        assert!(render()
            .contains(r#"<span class="supporting-text">Must be at least 8 characters</span>"#));
    }

    #[test]
    fn links_to_other_routes() {
        let html = render();

        for href in ["/terms", "/privacy", "/signin"] {
            assert!(html.contains(&format!(r#"href="{}""#, href)), "{}", href);
        }
    }

    #[test]
    fn rendering_is_byte_identical() {
        assert_eq!(render(), render());
    }
}
