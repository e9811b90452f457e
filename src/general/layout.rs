use std::fmt;

use askama::Template;
use axum::http::HeaderMap;

const HX_REQUEST: &str = "HX-Request";

/// Template
/// Full document around a page, for requests that were not issued by htmx
#[derive(Template)]
#[template(path = "general/layout_page.html")]
pub struct LayoutPage<T: fmt::Display> {
    title: &'static str,
    content: T,
}

impl<T: fmt::Display> LayoutPage<T> {
    pub fn from(title: &'static str, content: T) -> Self {
        Self { title, content }
    }
}

/// True when htmx issued the request and only expects the page fragment
pub fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers
        .get(HX_REQUEST)
        .is_some_and(|value| value.as_bytes().eq_ignore_ascii_case(b"true"))
}
