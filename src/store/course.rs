use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Course, TOTAL_WEEKS, Week};
use crate::seed;
use crate::store::CourseAction;

/// Course slice: the catalog, the current selection, and the 16-week
/// timeline of the selected course.
///
/// Every operation is total: actions that reference an id or week number
/// that does not exist leave the state unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseState {
    pub courses: Vec<Course>,
    pub selected_course: Option<Course>,
    pub weeks: Vec<Week>,
    pub current_week: u8,
}

fn generate_weeks() -> Vec<Week> {
    (1..=TOTAL_WEEKS).map(Week::empty).collect()
}

impl Default for CourseState {
    fn default() -> Self {
        Self {
            courses: Vec::new(),
            selected_course: None,
            weeks: generate_weeks(),
            current_week: 1,
        }
    }
}

impl CourseState {
    /// State preloaded with the starter catalog.
    pub fn seeded() -> Self {
        Self {
            courses: seed::initial_courses(),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: CourseAction) {
        match action {
            CourseAction::SelectCourse { course_id } => {
                if let Some(course) = self.courses.iter().find(|c| c.id == course_id) {
                    self.selected_course = Some(course.clone());
                    self.current_week = 1;
                    // The timeline is not kept per course; selecting
                    // rebuilds it empty.
                    self.weeks = generate_weeks();
                }
            }
            CourseAction::DeselectCourse => {
                self.selected_course = None;
                self.current_week = 1;
            }
            CourseAction::AddCourse(course) => {
                // Id uniqueness is the caller's responsibility.
                self.courses.push(course);
            }
            CourseAction::UpdateCourse { id, updates } => {
                if let Some(course) = self.courses.iter_mut().find(|c| c.id == id) {
                    course.merge(updates.clone());
                    // Keep the selection in step with the catalog entry.
                    if let Some(selected) = self.selected_course.as_mut()
                        && selected.id == id
                    {
                        selected.merge(updates);
                    }
                }
            }
            CourseAction::DeleteCourse { id } => {
                self.courses.retain(|c| c.id != id);
                if self.selected_course.as_ref().is_some_and(|c| c.id == id) {
                    self.selected_course = None;
                    self.current_week = 1;
                }
            }
            CourseAction::AddItem { week_number, item } => {
                if let Some(week) = self.week_mut(week_number) {
                    week.items.push(item);
                }
            }
            CourseAction::UpdateItem { week_number, item_id, updates } => {
                if let Some(week) = self.week_mut(week_number)
                    && let Some(item) = week.items.iter_mut().find(|i| i.id == item_id)
                {
                    item.merge(updates);
                }
            }
            CourseAction::DeleteItem { week_number, item_id } => {
                if let Some(week) = self.week_mut(week_number) {
                    week.items.retain(|i| i.id != item_id);
                }
            }
            CourseAction::SetCurrentWeek(week_number) => {
                if (1..=TOTAL_WEEKS).contains(&week_number) {
                    self.current_week = week_number;
                } else {
                    warn!(week_number, "ignoring out-of-range week");
                }
            }
            CourseAction::UpdateWeekTitle { week_number, title } => {
                if let Some(week) = self.week_mut(week_number) {
                    week.title = title;
                }
            }
        }
    }

    pub fn week(&self, week_number: u8) -> Option<&Week> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    fn week_mut(&mut self, week_number: u8) -> Option<&mut Week> {
        self.weeks.iter_mut().find(|w| w.week_number == week_number)
    }

    /// The week currently shown by the timeline view.
    pub fn current_week_data(&self) -> Option<&Week> {
        self.week(self.current_week)
    }

    /// Mean of the per-week completion percentages across the timeline.
    pub fn overall_progress(&self) -> u8 {
        if self.weeks.is_empty() {
            return 0;
        }
        let total: u32 = self.weeks.iter().map(|w| w.completion_percent() as u32).sum();
        (total as f64 / self.weeks.len() as f64).round() as u8
    }
}
