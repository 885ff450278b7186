pub mod determiner;
pub mod noun;
pub mod verb;
pub mod word;
