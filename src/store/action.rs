use crate::models::{Course, CourseItem, CourseUpdate, ItemUpdate, User};

/// Every mutation the store accepts, one variant per operation.
#[derive(Debug, Clone)]
pub enum Action {
    Auth(AuthAction),
    Course(CourseAction),
}

#[derive(Debug, Clone)]
pub enum AuthAction {
    Login(User),
    Logout,
    ShowLoginForm,
    HideLoginForm,
}

#[derive(Debug, Clone)]
pub enum CourseAction {
    SelectCourse { course_id: String },
    DeselectCourse,
    AddCourse(Course),
    UpdateCourse { id: String, updates: CourseUpdate },
    DeleteCourse { id: String },
    AddItem { week_number: u8, item: CourseItem },
    UpdateItem { week_number: u8, item_id: String, updates: ItemUpdate },
    DeleteItem { week_number: u8, item_id: String },
    SetCurrentWeek(u8),
    UpdateWeekTitle { week_number: u8, title: String },
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<CourseAction> for Action {
    fn from(action: CourseAction) -> Self {
        Action::Course(action)
    }
}
