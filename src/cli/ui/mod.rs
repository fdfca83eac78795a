pub mod banner;
pub mod prompts;
pub mod test_mode;
