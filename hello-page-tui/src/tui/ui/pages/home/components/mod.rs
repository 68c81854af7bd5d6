pub mod banner;
pub mod call_button;
pub mod notices;
