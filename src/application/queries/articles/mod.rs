mod edit;
mod get_by_id;
mod list;
mod service;

pub use edit::GetArticleForEditQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
