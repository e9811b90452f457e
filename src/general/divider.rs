use askama::Template;

#[derive(Clone, Debug, Template)]
#[template(path = "general/divider_block.html")]
pub struct DividerBlock {
    label: &'static str,
}

impl DividerBlock {
    pub fn from(label: &'static str) -> Self {
        Self { label }
    }
}
