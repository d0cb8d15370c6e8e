//! Canonical records for tests.
//!
//! Every factory returns the same values on each call. The `_with` variants
//! apply an override closure on top of the canonical record.

use crate::components::assignment_row::AssignmentStatus;
use crate::state::records::{Assignment, Course, Role, User};

pub fn mock_user() -> User {
    User {
        id: "user-1".to_owned(),
        name: "Jordan Avery".to_owned(),
        email: "jordan.avery@school.edu".to_owned(),
        role: Role::Student,
    }
}

pub fn mock_user_with(apply: impl FnOnce(&mut User)) -> User {
    let mut user = mock_user();
    apply(&mut user);
    user
}

pub fn mock_course() -> Course {
    Course {
        id: "course-1".to_owned(),
        code: "CS 101".to_owned(),
        title: "Introduction to Programming".to_owned(),
        instructor: "Dr. Rivera".to_owned(),
        progress: 40,
        lessons: 12,
    }
}

pub fn mock_course_with(apply: impl FnOnce(&mut Course)) -> Course {
    let mut course = mock_course();
    apply(&mut course);
    course
}

pub fn mock_assignment() -> Assignment {
    Assignment {
        id: "assignment-1".to_owned(),
        title: "Problem Set 1".to_owned(),
        course: "CS 101".to_owned(),
        due: "Oct 24".to_owned(),
        status: AssignmentStatus::Submitted.as_str().to_owned(),
    }
}

pub fn mock_assignment_with(apply: impl FnOnce(&mut Assignment)) -> Assignment {
    let mut assignment = mock_assignment();
    apply(&mut assignment);
    assignment
}

/// `count` assignments with sequential ids, cycling through every status.
pub fn mock_assignments(count: usize) -> Vec<Assignment> {
    (0..count)
        .map(|i| {
            let n = i + 1;
            mock_assignment_with(|a| {
                a.id = format!("assignment-{n}");
                a.title = format!("Problem Set {n}");
                a.status = AssignmentStatus::ALL[i % AssignmentStatus::ALL.len()]
                    .as_str()
                    .to_owned();
            })
        })
        .collect()
}
