pub mod data_persistance;
pub mod droid;
pub mod openai_client;
pub mod prompt_compiler;
pub mod submission;
pub mod website_scraper;

pub use data_persistance::*;
pub use droid::*;
pub use openai_client::*;
pub use prompt_compiler::*;
pub use submission::*;
pub use website_scraper::*;
