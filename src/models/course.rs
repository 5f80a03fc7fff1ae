use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TOTAL_WEEKS;

/// Catalog image shown when a course is created without one.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.pexels.com/photos/159711/books-bookstore-book-reading-159711.jpeg?auto=compress&cs=tinysrgb&w=800";

/// A catalog entry. Dates and duration are display strings; the store does
/// not interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub start_date: String,
    pub end_date: String,
    pub total_weeks: u8,
    pub image_url: Option<String>,
    pub category: String,
}

/// User-supplied fields for a new course; everything else is defaulted by
/// [`Course::create`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseRequest {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub start_date: String,
    pub end_date: String,
    pub category: String,
    pub image_url: Option<String>,
}

/// Partial update: `Some` fields overwrite, `None` fields are left alone.
/// Merge is shallow, and optional course fields can be set but not cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub duration: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_weeks: Option<u8>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl Course {
    pub fn create(req: NewCourseRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: req.title,
            description: req.description,
            instructor: req.instructor,
            duration: format!("{TOTAL_WEEKS} weeks"),
            start_date: req.start_date,
            end_date: req.end_date,
            total_weeks: TOTAL_WEEKS,
            image_url: req
                .image_url
                .filter(|url| !url.is_empty())
                .or_else(|| Some(PLACEHOLDER_IMAGE_URL.to_string())),
            category: req.category,
        }
    }

    pub fn merge(&mut self, updates: CourseUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(instructor) = updates.instructor {
            self.instructor = instructor;
        }
        if let Some(duration) = updates.duration {
            self.duration = duration;
        }
        if let Some(start_date) = updates.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = updates.end_date {
            self.end_date = end_date;
        }
        if let Some(total_weeks) = updates.total_weeks {
            self.total_weeks = total_weeks;
        }
        if let Some(image_url) = updates.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(category) = updates.category {
            self.category = category;
        }
    }
}
