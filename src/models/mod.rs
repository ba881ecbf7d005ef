mod blog;
mod user;

pub use blog::{Blog, NewBlog, UpdateBlog};
pub use user::{NewUser, User, UserSummary};
