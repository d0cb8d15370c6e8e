//! Static sample content shared by the page shells.

use crate::state::records::{Assignment, Course, Role, User};

/// `(id, code, title, instructor, progress, lessons)`
const COURSES: &[(&str, &str, &str, &str, u8, u32)] = &[
    ("cs-101", "CS 101", "Introduction to Programming", "Dr. Rivera", 72, 24),
    ("math-201", "MATH 201", "Linear Algebra", "Prof. Okafor", 45, 18),
    ("hist-110", "HIST 110", "World History", "Dr. Lindqvist", 90, 20),
    ("bio-150", "BIO 150", "Cell Biology", "Dr. Haddad", 15, 16),
];

/// `(id, title, course, due, status)`
const ASSIGNMENTS: &[(&str, &str, &str, &str, &str)] = &[
    ("a-1", "Recursion Problem Set", "CS 101", "Oct 24", "pending"),
    ("a-2", "Eigenvalues Worksheet", "MATH 201", "Oct 18", "overdue"),
    ("a-3", "Industrial Revolution Essay", "HIST 110", "Oct 12", "submitted"),
    ("a-4", "Lab Report: Mitosis", "BIO 150", "Oct 30", "pending"),
    ("a-5", "Sorting Algorithms Quiz", "CS 101", "Oct 10", "submitted"),
];

/// Dashboard headline figures.
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: &'static str,
    pub hint: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Enrolled Courses", value: "4", tone: "info", hint: "Fall term" },
    Stat { label: "Average Grade", value: "A-", tone: "success", hint: "Up from B+" },
    Stat { label: "Due This Week", value: "2", tone: "warning", hint: "Next: Oct 24" },
    Stat { label: "Overdue", value: "1", tone: "danger", hint: "Submit as soon as possible" },
];

pub fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Sam Patel".to_owned(),
        email: "sam.patel@school.edu".to_owned(),
        role: Role::Student,
    }
}

pub fn sample_courses() -> Vec<Course> {
    COURSES
        .iter()
        .map(|&(id, code, title, instructor, progress, lessons)| Course {
            id: id.to_owned(),
            code: code.to_owned(),
            title: title.to_owned(),
            instructor: instructor.to_owned(),
            progress,
            lessons,
        })
        .collect()
}

pub fn sample_assignments() -> Vec<Assignment> {
    ASSIGNMENTS
        .iter()
        .map(|&(id, title, course, due, status)| Assignment {
            id: id.to_owned(),
            title: title.to_owned(),
            course: course.to_owned(),
            due: due.to_owned(),
            status: status.to_owned(),
        })
        .collect()
}

pub fn find_course(id: &str) -> Option<Course> {
    sample_courses().into_iter().find(|c| c.id == id)
}

/// Assignments whose `course` matches the course code.
pub fn assignments_for(code: &str) -> Vec<Assignment> {
    sample_assignments().into_iter().filter(|a| a.course == code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::assignment_row::AssignmentStatus;

    #[test]
    fn sample_ids_are_unique() {
        let courses = sample_courses();
        let mut ids: Vec<_> = courses.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), courses.len());
    }

    #[test]
    fn sample_statuses_are_known() {
        for a in sample_assignments() {
            let parsed = AssignmentStatus::parse_or_default(&a.status);
            assert_eq!(parsed.as_str(), a.status, "{}", a.id);
        }
    }

    #[test]
    fn every_assignment_belongs_to_a_listed_course() {
        let codes: Vec<_> = sample_courses().into_iter().map(|c| c.code).collect();
        assert!(sample_assignments().iter().all(|a| codes.contains(&a.course)));
    }

    #[test]
    fn find_course_and_assignments_for() {
        let course = find_course("cs-101").unwrap();
        assert_eq!(course.code, "CS 101");
        assert_eq!(assignments_for(&course.code).len(), 2);
        assert!(find_course("missing").is_none());
    }
}
