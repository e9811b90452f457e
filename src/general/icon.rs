use askama::Template;
use tracing::warn;

/// Icons of the sprite sheet served at /static/icons.svg
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Icon {
    Cancel,
    Logo,
    Google,
    UserPlus,
}

impl Icon {
    /// Icon lookup
    /// Find the icon from its symbol name in the sprite sheet
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cancel" => Some(Icon::Cancel),
            "logo" => Some(Icon::Logo),
            "G" => Some(Icon::Google),
            "user_plus" => Some(Icon::UserPlus),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Cancel => "cancel",
            Icon::Logo => "logo",
            Icon::Google => "G",
            Icon::UserPlus => "user_plus",
        }
    }
}

#[derive(Clone, Debug, Template)]
#[template(path = "general/icon_block.html")]
pub struct IconBlock {
    icon: Option<Icon>,
}

impl IconBlock {
    /// Icon block from a symbol name
    /// An unknown name renders nothing
    pub fn named(name: &str) -> Self {
        let icon = Icon::from_name(name);

        if icon.is_none() {
            warn!("Unknown icon '{}'", name);
        }

        Self { icon }
    }
}
