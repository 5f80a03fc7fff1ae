use coursetrack::{
    AuthAction, Course, CourseAction, CourseItem, ItemUpdate, NewCourseRequest, NewItemRequest,
    Store, User,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scripted session against a seeded store: sign in as an admin, create and
/// select a course, fill in a week, and print the resulting snapshot.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "coursetrack=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = Store::seeded();
    info!(courses = store.state().course.courses.len(), "store seeded");

    store.dispatch(AuthAction::ShowLoginForm);
    store.dispatch(AuthAction::Login(User::demo("admin".parse()?)));
    info!(can_edit = store.state().auth.can_edit(), "signed in");

    let course = Course::create(NewCourseRequest {
        title: "Rust for Web Engineers".to_string(),
        description: "Ownership, traits, and async from a web developer's point of view."
            .to_string(),
        instructor: "Dr. Priya Nair".to_string(),
        start_date: "2024-03-04".to_string(),
        end_date: "2024-07-04".to_string(),
        category: "Technology".to_string(),
        image_url: None,
    });
    let course_id = course.id.clone();
    store.dispatch(CourseAction::AddCourse(course));
    store.dispatch(CourseAction::SelectCourse { course_id });

    let reading = CourseItem::create(NewItemRequest {
        title: "The Book, ch. 4".to_string(),
        description: "Ownership and borrowing.".to_string(),
        due_date: Some("2024-03-11".to_string()),
        item_type: "reading".parse()?,
    });
    let reading_id = reading.id.clone();
    store.dispatch(CourseAction::AddItem { week_number: 1, item: reading });
    store.dispatch(CourseAction::AddItem {
        week_number: 1,
        item: CourseItem::create(NewItemRequest {
            title: "Borrow checker exercises".to_string(),
            description: "Fix the five broken programs.".to_string(),
            due_date: Some("2024-03-15".to_string()),
            item_type: "assignment".parse()?,
        }),
    });
    store.dispatch(CourseAction::UpdateWeekTitle {
        week_number: 1,
        title: "Ownership".to_string(),
    });

    store.dispatch(CourseAction::UpdateItem {
        week_number: 1,
        item_id: reading_id,
        updates: ItemUpdate {
            completed: Some(true),
            ..ItemUpdate::default()
        },
    });
    store.dispatch(CourseAction::SetCurrentWeek(2));
    store.dispatch(CourseAction::SetCurrentWeek(1));

    if let Some(week) = store.state().course.current_week_data() {
        info!(
            week = week.week_number,
            title = %week.title,
            completed = week.completed_count(),
            total = week.items.len(),
            percent = week.completion_percent(),
            "week progress"
        );
    }
    info!(overall = store.state().course.overall_progress(), "course progress");

    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);

    store.dispatch(AuthAction::Logout);
    Ok(())
}
