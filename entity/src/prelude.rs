pub use super::progress_cap::Entity as ProgressCap;
pub use super::student::Entity as Student;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::team_mode_rule::Entity as TeamModeRule;
pub use super::user::Entity as User;
pub use super::user_student_progress::Entity as UserStudentProgress;
