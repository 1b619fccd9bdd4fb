pub mod constants;
pub mod document;
pub mod menus;
pub mod output;
