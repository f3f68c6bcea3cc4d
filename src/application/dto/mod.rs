pub mod articles;
pub mod auth;
pub mod authors;

pub use articles::{ArticleDto, ArticleListDto};
pub use auth::{AuthResponseDto, AuthTokenDto, AuthenticatedUser, RegistrationDto, UserDto};
pub use authors::AuthorDto;
