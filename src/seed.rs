//! Starter catalog the application boots with.

use crate::models::Course;

pub fn initial_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            title: "Advanced Web Development".to_string(),
            description: "Master modern web development with React, Node.js, and advanced JavaScript concepts.".to_string(),
            instructor: "Dr. Sarah Johnson".to_string(),
            duration: "16 weeks".to_string(),
            start_date: "2024-01-15".to_string(),
            end_date: "2024-05-15".to_string(),
            total_weeks: 16,
            image_url: Some("https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=800".to_string()),
            category: "Technology".to_string(),
        },
        Course {
            id: "2".to_string(),
            title: "Digital Marketing Strategy".to_string(),
            description: "Learn comprehensive digital marketing strategies, SEO, social media, and analytics.".to_string(),
            instructor: "Prof. Michael Chen".to_string(),
            duration: "16 weeks".to_string(),
            start_date: "2024-02-01".to_string(),
            end_date: "2024-06-01".to_string(),
            total_weeks: 16,
            image_url: Some("https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg?auto=compress&cs=tinysrgb&w=800".to_string()),
            category: "Marketing".to_string(),
        },
        Course {
            id: "3".to_string(),
            title: "Data Science Fundamentals".to_string(),
            description: "Explore data analysis, machine learning, and statistical modeling with Python.".to_string(),
            instructor: "Dr. Emily Rodriguez".to_string(),
            duration: "16 weeks".to_string(),
            start_date: "2024-01-22".to_string(),
            end_date: "2024-05-22".to_string(),
            total_weeks: 16,
            image_url: Some("https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800".to_string()),
            category: "Data Science".to_string(),
        },
        Course {
            id: "4".to_string(),
            title: "UX/UI Design Mastery".to_string(),
            description: "Create exceptional user experiences through design thinking and modern UI principles.".to_string(),
            instructor: "Alex Thompson".to_string(),
            duration: "16 weeks".to_string(),
            start_date: "2024-02-05".to_string(),
            end_date: "2024-06-05".to_string(),
            total_weeks: 16,
            image_url: Some("https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=800".to_string()),
            category: "Design".to_string(),
        },
    ]
}
