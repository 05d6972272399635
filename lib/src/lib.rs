mod data;
mod engine;
mod results;

pub use data::sorted_letters;
pub use data::AnagramDictionary;
pub use engine::*;
pub use results::*;
