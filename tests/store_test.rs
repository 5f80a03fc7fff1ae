use coursetrack::{
    AuthAction, CourseAction, CourseItem, CourseUpdate, ItemType, ItemUpdate, Role, Store, User,
};

fn reading_item(id: &str, title: &str) -> CourseItem {
    CourseItem {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        completed: false,
        due_date: None,
        item_type: ItemType::Reading,
    }
}

#[test]
fn deleting_the_selected_course_resets_the_view() {
    let mut store = Store::seeded();
    assert_eq!(store.state().course.courses.len(), 4);

    store.dispatch(CourseAction::SelectCourse { course_id: "1".to_string() });
    store.dispatch(CourseAction::SetCurrentWeek(6));
    store.dispatch(CourseAction::DeleteCourse { id: "1".to_string() });

    assert_eq!(store.state().course.courses.len(), 3);
    assert_eq!(store.state().course.selected_course, None);
    assert_eq!(store.state().course.current_week, 1);
}

#[test]
fn item_lifecycle_within_a_week() {
    let mut store = Store::seeded();
    store.dispatch(CourseAction::SelectCourse { course_id: "2".to_string() });

    store.dispatch(CourseAction::AddItem {
        week_number: 3,
        item: reading_item("x", "T"),
    });
    store.dispatch(CourseAction::UpdateItem {
        week_number: 3,
        item_id: "x".to_string(),
        updates: ItemUpdate {
            completed: Some(true),
            ..ItemUpdate::default()
        },
    });

    let week = store.state().course.week(3).expect("week 3 exists");
    assert_eq!(week.items.len(), 1);
    assert!(week.items[0].completed);
    assert_eq!(week.items[0].title, "T");
}

#[test]
fn reselecting_a_course_discards_week_content() {
    let mut store = Store::seeded();
    store.dispatch(CourseAction::SelectCourse { course_id: "1".to_string() });
    store.dispatch(CourseAction::AddItem {
        week_number: 2,
        item: reading_item("a", "Old content"),
    });

    store.dispatch(CourseAction::SelectCourse { course_id: "2".to_string() });

    let course = &store.state().course;
    assert_eq!(course.weeks.len(), 16);
    assert!(course.weeks.iter().all(|w| w.items.is_empty()));
    assert_eq!(course.current_week, 1);
}

#[test]
fn login_dismisses_a_visible_form() {
    let mut store = Store::new();
    store.dispatch(AuthAction::ShowLoginForm);
    assert!(store.state().auth.show_login);

    store.dispatch(AuthAction::Login(User {
        id: "u1".to_string(),
        name: "Ann".to_string(),
        email: "a@b.com".to_string(),
        role: Role::Admin,
    }));

    assert!(store.state().auth.is_authenticated);
    assert!(!store.state().auth.show_login);
}

#[test]
fn update_of_selected_course_stays_consistent_with_catalog() {
    let mut store = Store::seeded();
    store.dispatch(CourseAction::SelectCourse { course_id: "4".to_string() });

    store.dispatch(CourseAction::UpdateCourse {
        id: "4".to_string(),
        updates: CourseUpdate {
            title: Some("Product Design Mastery".to_string()),
            description: Some("Design systems end to end.".to_string()),
            ..CourseUpdate::default()
        },
    });

    let course = &store.state().course;
    let in_catalog = course
        .courses
        .iter()
        .find(|c| c.id == "4")
        .expect("course 4 in catalog");
    assert_eq!(course.selected_course.as_ref(), Some(in_catalog));
    assert_eq!(in_catalog.title, "Product Design Mastery");
}

#[test]
fn operations_on_missing_ids_leave_state_unchanged() {
    let mut store = Store::seeded();
    store.dispatch(CourseAction::SelectCourse { course_id: "1".to_string() });
    let before = store.snapshot();

    store.dispatch(CourseAction::SelectCourse { course_id: "99".to_string() });
    store.dispatch(CourseAction::UpdateCourse {
        id: "99".to_string(),
        updates: CourseUpdate {
            title: Some("ghost".to_string()),
            ..CourseUpdate::default()
        },
    });
    store.dispatch(CourseAction::DeleteCourse { id: "99".to_string() });
    store.dispatch(CourseAction::DeleteItem {
        week_number: 1,
        item_id: "ghost".to_string(),
    });
    store.dispatch(CourseAction::UpdateWeekTitle {
        week_number: 42,
        title: "ghost".to_string(),
    });

    let after = store.state();
    assert_eq!(after.course.courses, before.course.courses);
    assert_eq!(after.course.selected_course, before.course.selected_course);
    assert_eq!(after.course.weeks, before.course.weeks);
    assert_eq!(after.course.current_week, before.course.current_week);
}

#[test]
fn snapshot_serializes_with_frontend_field_names() {
    let mut store = Store::seeded();
    store.dispatch(AuthAction::Login(User::demo(Role::Admin)));
    store.dispatch(CourseAction::SelectCourse { course_id: "1".to_string() });
    store.dispatch(CourseAction::AddItem {
        week_number: 1,
        item: reading_item("r1", "Syllabus"),
    });

    let json = serde_json::to_value(store.snapshot()).expect("snapshot serializes");

    assert_eq!(json["auth"]["isAuthenticated"], true);
    assert_eq!(json["auth"]["user"]["role"], "admin");
    assert_eq!(json["course"]["currentWeek"], 1);
    assert_eq!(json["course"]["selectedCourse"]["startDate"], "2024-01-15");
    let week = &json["course"]["weeks"][0];
    assert_eq!(week["weekNumber"], 1);
    assert_eq!(week["items"][0]["type"], "reading");
    assert_eq!(week["items"][0]["completed"], false);
}

#[test]
fn grouping_and_progress_track_the_week_contents() {
    let mut store = Store::seeded();
    store.dispatch(CourseAction::SelectCourse { course_id: "3".to_string() });

    let mut assignment = reading_item("hw", "Problem set");
    assignment.item_type = ItemType::Assignment;
    store.dispatch(CourseAction::AddItem { week_number: 1, item: reading_item("r1", "Paper") });
    store.dispatch(CourseAction::AddItem { week_number: 1, item: assignment });
    store.dispatch(CourseAction::UpdateItem {
        week_number: 1,
        item_id: "r1".to_string(),
        updates: ItemUpdate {
            completed: Some(true),
            ..ItemUpdate::default()
        },
    });

    let week = store.state().course.week(1).expect("week 1 exists");
    assert_eq!(week.items_of_type(ItemType::Reading).count(), 1);
    assert_eq!(week.items_of_type(ItemType::Assignment).count(), 1);
    assert_eq!(week.items_of_type(ItemType::Coursework).count(), 0);
    assert_eq!(week.completion_percent(), 50);
    assert_eq!(store.state().course.overall_progress(), 3); // 50 / 16, rounded
}
