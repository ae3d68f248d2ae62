mod get_about_content;
mod get_home_content;

pub use get_about_content::{AboutContent, GetAboutContentUseCase, SkillGroup};
pub use get_home_content::{GetHomeContentUseCase, HomeContent};
