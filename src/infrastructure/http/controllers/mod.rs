pub mod countdown_api;
pub mod og_card;
pub mod pages;
