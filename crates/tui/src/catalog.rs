//! Built-in course catalog shown by the screens.
//!
//! Responsibilities:
//! - Provide the featured, enrolled and recent-activity data the screens list.
//! - Filter courses by the search box query.
//!
//! Does NOT handle:
//! - Persistence or remote fetching (the catalog is static).

/// A course card.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub instructor: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub rating: f32,
    pub students: u32,
    pub progress: u8,
    pub enrolled: bool,
}

/// Progress detail for an enrolled course.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub course_id: u32,
    pub next_lesson: &'static str,
    pub completed_lessons: u32,
    pub total_lessons: u32,
    pub learning_methods: &'static [&'static str],
}

/// One row of the dashboard's recent activity feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub kind: &'static str,
    pub course: &'static str,
    pub lesson: &'static str,
    pub time: &'static str,
}

pub static COURSES: [Course; 4] = [
    Course {
        id: 1,
        title: "Algebra 101",
        instructor: "Dr. Smith",
        category: "Math",
        difficulty: "Beginner",
        rating: 4.8,
        students: 1234,
        progress: 65,
        enrolled: true,
    },
    Course {
        id: 2,
        title: "Biology Basics",
        instructor: "Prof. Johnson",
        category: "Science",
        difficulty: "Intermediate",
        rating: 4.9,
        students: 856,
        progress: 40,
        enrolled: true,
    },
    Course {
        id: 3,
        title: "Chemistry Essentials",
        instructor: "Prof. Davis",
        category: "Science",
        difficulty: "Intermediate",
        rating: 4.6,
        students: 1876,
        progress: 0,
        enrolled: false,
    },
    Course {
        id: 4,
        title: "World History",
        instructor: "Dr. Brown",
        category: "History",
        difficulty: "Beginner",
        rating: 4.8,
        students: 1456,
        progress: 0,
        enrolled: false,
    },
];

pub static ENROLLMENTS: [Enrollment; 2] = [
    Enrollment {
        course_id: 1,
        next_lesson: "Quadratic Equations",
        completed_lessons: 13,
        total_lessons: 20,
        learning_methods: &["notes", "flashcards", "quizzes", "audio"],
    },
    Enrollment {
        course_id: 2,
        next_lesson: "Cell Structure",
        completed_lessons: 6,
        total_lessons: 15,
        learning_methods: &["notes", "videos", "quizzes"],
    },
];

pub static RECENT_ACTIVITY: [Activity; 3] = [
    Activity {
        kind: "completed",
        course: "Algebra 101",
        lesson: "Quadratic Equations",
        time: "2 hours ago",
    },
    Activity {
        kind: "started",
        course: "Biology Basics",
        lesson: "Cell Structure",
        time: "1 day ago",
    },
    Activity {
        kind: "achievement",
        course: "Math Fundamentals",
        lesson: "Completed Chapter 3",
        time: "2 days ago",
    },
];

pub static LEARNING_STYLES: [&str; 4] = ["Visual", "Auditory", "Reading/Writing", "Kinesthetic"];

pub fn course(id: u32) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id)
}

pub fn enrollment(course_id: u32) -> Option<&'static Enrollment> {
    ENROLLMENTS.iter().find(|e| e.course_id == course_id)
}

/// Courses whose title, instructor or category contains `query`, ignoring case.
/// An empty query matches everything.
pub fn search(query: &str) -> Vec<&'static Course> {
    let query = query.trim().to_lowercase();
    COURSES
        .iter()
        .filter(|c| {
            query.is_empty()
                || c.title.to_lowercase().contains(&query)
                || c.instructor.to_lowercase().contains(&query)
                || c.category.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn enrolled() -> Vec<&'static Course> {
    COURSES.iter().filter(|c| c.enrolled).collect()
}

/// Mean progress over enrolled courses, rounded.
pub fn average_progress() -> u8 {
    let enrolled = enrolled();
    if enrolled.is_empty() {
        return 0;
    }
    let total: u32 = enrolled.iter().map(|c| u32::from(c.progress)).sum();
    let count = enrolled.len() as u32;
    ((total + count / 2) / count) as u8
}
