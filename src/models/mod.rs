pub mod course;
pub mod item;
pub mod user;

pub use course::{Course, CourseUpdate, NewCourseRequest};
pub use item::{CourseItem, ItemType, ItemUpdate, NewItemRequest, TOTAL_WEEKS, Week};
pub use user::{Role, User};
