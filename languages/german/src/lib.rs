pub mod article;
pub mod language;

pub use article::Article;
pub use language::GermanLanguage;
