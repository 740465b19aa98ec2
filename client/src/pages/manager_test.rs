use super::*;
use access::{Course, Role, User};

fn record(student_name: Option<&str>, instructor: Option<User>) -> CourseStudent {
    CourseStudent {
        id: Some(1),
        student: User { id: 3, name: student_name.map(str::to_owned), username: "stu".to_owned(), role: Some(Role::Student) },
        course: Course { id: 8, name: "Databases".to_owned(), instructor },
    }
}

#[test]
fn row_uses_student_name_and_instructor() {
    let teacher = User { id: 2, name: Some("Tina".to_owned()), username: "tina".to_owned(), role: Some(Role::Teacher) };
    let row = enrollment_row(&record(Some("Sam"), Some(teacher)));
    assert_eq!(row, ("Sam".to_owned(), "Databases".to_owned(), "Tina".to_owned()));
}

#[test]
fn row_falls_back_to_username_and_blank_instructor() {
    let row = enrollment_row(&record(None, None));
    assert_eq!(row.0, "stu");
    assert_eq!(row.2, "");
}
