pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use specifications::ArticleOwnershipSpec;
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle};
