pub mod error;
pub mod models;
pub mod seed;
pub mod store;

pub use error::ParseError;
pub use models::{
    Course, CourseItem, CourseUpdate, ItemType, ItemUpdate, NewCourseRequest, NewItemRequest,
    Role, TOTAL_WEEKS, User, Week,
};
pub use store::{Action, AppState, AuthAction, AuthState, CourseAction, CourseState, Store};
