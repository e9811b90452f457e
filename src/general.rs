pub mod divider;
pub mod icon;
pub mod layout;
