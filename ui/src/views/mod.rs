mod not_found;
pub use not_found::NotFound;

mod page;
pub use page::{PageView, HOME_SLUG};
