pub mod articles;
pub mod auth;
pub mod sessions;
pub mod users;

pub use articles::{ArticleDetailDto, ArticleDto, ArticleSummaryDto};
pub use auth::AuthenticatedUser;
pub use sessions::{FlashKind, FlashMessage, SessionRecord};
pub use users::UserDto;
