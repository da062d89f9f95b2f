pub use super::meeting::Entity as Meeting;
pub use super::meeting_task::Entity as MeetingTask;
pub use super::milestone::Entity as Milestone;
pub use super::project::Entity as Project;
pub use super::project_team::Entity as ProjectTeam;
pub use super::student::Entity as Student;
pub use super::task::Entity as Task;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
