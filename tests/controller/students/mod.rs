//! Tests for student controller endpoints.

mod get_student;
mod list_students;
mod upsert_student_progress;

use super::*;
