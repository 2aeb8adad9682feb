//! In-memory directory store — the default backend for development and
//! tests; a database-backed store would implement the same traits.

use async_trait::async_trait;
use tokio::sync::RwLock;

use rc_protocol::{FacultyRecord, StudentRecord, SubjectRecord, is_usn_shaped};

use crate::error::{RosterError, RosterResult};
use crate::store::{
    FacultyRepository, NewFaculty, NewStudent, NewSubject, StudentRepository, SubjectRepository,
};

/// All three directories behind `RwLock<Vec<_>>`, preserving insertion
/// order for listings.
pub struct InMemoryRoster {
    faculty: RwLock<Vec<FacultyRecord>>,
    subjects: RwLock<Vec<SubjectRecord>>,
    students: RwLock<Vec<StudentRecord>>,
}

impl InMemoryRoster {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            faculty: RwLock::new(Vec::new()),
            subjects: RwLock::new(Vec::new()),
            students: RwLock::new(Vec::new()),
        }
    }

    /// Create a directory pre-seeded with a small department, for
    /// development and tests.
    pub fn with_sample_data() -> Self {
        let mut faculty = Vec::new();
        for (name, email, password, faculty_id, codes) in [
            (
                "Dr. Priya Sharma",
                "priya.sharma@rollcall.edu",
                "priya@123",
                "FAC-101",
                &["CS301", "CS302"][..],
            ),
            (
                "Prof. Arjun Mehta",
                "arjun.mehta@rollcall.edu",
                "arjun@123",
                "FAC-102",
                &["CS303"][..],
            ),
            (
                "Dr. Kavya Reddy",
                "kavya.reddy@rollcall.edu",
                "kavya@123",
                "FAC-103",
                &[][..],
            ),
        ] {
            let mut record = FacultyRecord::new(name, email, password, faculty_id);
            record.assigned_subjects = codes.iter().map(|c| (*c).to_string()).collect();
            faculty.push(record);
        }

        let mut subjects = Vec::new();
        for (name, code, semester, credits, teacher) in [
            ("Data Structures", "CS301", 3, 4, Some(("FAC-101", "Dr. Priya Sharma"))),
            ("Operating Systems", "CS302", 3, 4, Some(("FAC-101", "Dr. Priya Sharma"))),
            ("Database Systems", "CS303", 5, 3, Some(("FAC-102", "Prof. Arjun Mehta"))),
            ("Computer Networks", "CS304", 5, 3, None),
        ] {
            let mut record = SubjectRecord::new(name, code, semester, credits);
            if let Some((faculty_id, faculty_name)) = teacher {
                record.faculty_id = Some(faculty_id.to_string());
                record.faculty_name = Some(faculty_name.to_string());
            }
            subjects.push(record);
        }

        let students = vec![
            StudentRecord::new("1MS21CS001", "Ananya Rao", "ananya.rao@rollcall.edu", 3, "A"),
            StudentRecord::new("1MS21CS002", "Rohan Kulkarni", "rohan.kulkarni@rollcall.edu", 3, "A"),
            StudentRecord::new("1MS21CS003", "Sneha Iyer", "sneha.iyer@rollcall.edu", 5, "B"),
        ];

        Self {
            faculty: RwLock::new(faculty),
            subjects: RwLock::new(subjects),
            students: RwLock::new(students),
        }
    }
}

impl Default for InMemoryRoster {
    fn default() -> Self {
        Self::new()
    }
}

fn require_non_empty(field: &'static str, value: &str) -> RosterResult<()> {
    if value.trim().is_empty() {
        return Err(RosterError::Invalid {
            field,
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}

#[async_trait]
impl FacultyRepository for InMemoryRoster {
    async fn list(&self) -> RosterResult<Vec<FacultyRecord>> {
        Ok(self.faculty.read().await.clone())
    }

    async fn find_by_faculty_id(&self, faculty_id: &str) -> RosterResult<Option<FacultyRecord>> {
        Ok(self
            .faculty
            .read()
            .await
            .iter()
            .find(|f| f.faculty_id.eq_ignore_ascii_case(faculty_id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> RosterResult<Option<FacultyRecord>> {
        Ok(self
            .faculty
            .read()
            .await
            .iter()
            .find(|f| f.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn add(&self, new: NewFaculty) -> RosterResult<FacultyRecord> {
        require_non_empty("name", &new.name)?;
        require_non_empty("email", &new.email)?;
        require_non_empty("faculty_id", &new.faculty_id)?;

        let mut faculty = self.faculty.write().await;
        if faculty.iter().any(|f| f.email.eq_ignore_ascii_case(&new.email)) {
            return Err(RosterError::Duplicate {
                field: "email",
                value: new.email,
            });
        }
        if faculty
            .iter()
            .any(|f| f.faculty_id.eq_ignore_ascii_case(&new.faculty_id))
        {
            return Err(RosterError::Duplicate {
                field: "faculty_id",
                value: new.faculty_id,
            });
        }

        let record = FacultyRecord::new(new.name, new.email, new.password, new.faculty_id);
        tracing::info!(faculty_id = %record.faculty_id, "faculty registered");
        faculty.push(record.clone());
        Ok(record)
    }

    async fn remove(&self, faculty_id: &str) -> RosterResult<()> {
        let mut faculty = self.faculty.write().await;
        let Some(pos) = faculty
            .iter()
            .position(|f| f.faculty_id.eq_ignore_ascii_case(faculty_id))
        else {
            return Err(RosterError::NotFound {
                kind: "faculty",
                key: faculty_id.to_string(),
            });
        };
        let removed = faculty.remove(pos);
        tracing::info!(faculty_id = %removed.faculty_id, "faculty removed");
        Ok(())
    }

    async fn assign_subject(&self, faculty_id: &str, code: &str) -> RosterResult<FacultyRecord> {
        let mut faculty = self.faculty.write().await;
        let Some(record) = faculty
            .iter_mut()
            .find(|f| f.faculty_id.eq_ignore_ascii_case(faculty_id))
        else {
            return Err(RosterError::NotFound {
                kind: "faculty",
                key: faculty_id.to_string(),
            });
        };
        if !record
            .assigned_subjects
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code))
        {
            record.assigned_subjects.push(code.to_string());
            tracing::info!(faculty_id = %record.faculty_id, code, "subject assigned");
        }
        Ok(record.clone())
    }
}

#[async_trait]
impl SubjectRepository for InMemoryRoster {
    async fn list(&self) -> RosterResult<Vec<SubjectRecord>> {
        Ok(self.subjects.read().await.clone())
    }

    async fn find_by_code(&self, code: &str) -> RosterResult<Option<SubjectRecord>> {
        Ok(self
            .subjects
            .read()
            .await
            .iter()
            .find(|s| s.code.eq_ignore_ascii_case(code))
            .cloned())
    }

    async fn add(&self, new: NewSubject) -> RosterResult<SubjectRecord> {
        require_non_empty("name", &new.name)?;
        require_non_empty("code", &new.code)?;
        if !(1..=8).contains(&new.semester) {
            return Err(RosterError::Invalid {
                field: "semester",
                reason: format!("{} is outside 1-8", new.semester),
            });
        }
        if new.credits == 0 {
            return Err(RosterError::Invalid {
                field: "credits",
                reason: "must be at least 1".into(),
            });
        }

        let mut subjects = self.subjects.write().await;
        if subjects.iter().any(|s| s.code.eq_ignore_ascii_case(&new.code)) {
            return Err(RosterError::Duplicate {
                field: "code",
                value: new.code,
            });
        }

        let record = SubjectRecord::new(new.name, new.code, new.semester, new.credits);
        tracing::info!(code = %record.code, "subject added");
        subjects.push(record.clone());
        Ok(record)
    }

    async fn remove(&self, code: &str) -> RosterResult<()> {
        let mut subjects = self.subjects.write().await;
        let Some(pos) = subjects.iter().position(|s| s.code.eq_ignore_ascii_case(code)) else {
            return Err(RosterError::NotFound {
                kind: "subject",
                key: code.to_string(),
            });
        };
        let removed = subjects.remove(pos);
        tracing::info!(code = %removed.code, "subject removed");
        Ok(())
    }

    async fn set_faculty(
        &self,
        code: &str,
        faculty_id: &str,
        faculty_name: &str,
    ) -> RosterResult<SubjectRecord> {
        let mut subjects = self.subjects.write().await;
        let Some(record) = subjects.iter_mut().find(|s| s.code.eq_ignore_ascii_case(code)) else {
            return Err(RosterError::NotFound {
                kind: "subject",
                key: code.to_string(),
            });
        };
        record.faculty_id = Some(faculty_id.to_string());
        record.faculty_name = Some(faculty_name.to_string());
        tracing::info!(code = %record.code, faculty_id, "subject teacher set");
        Ok(record.clone())
    }
}

#[async_trait]
impl StudentRepository for InMemoryRoster {
    async fn list(&self) -> RosterResult<Vec<StudentRecord>> {
        Ok(self.students.read().await.clone())
    }

    async fn find_by_usn(&self, usn: &str) -> RosterResult<Option<StudentRecord>> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .find(|s| s.usn.eq_ignore_ascii_case(usn))
            .cloned())
    }

    async fn add(&self, new: NewStudent) -> RosterResult<StudentRecord> {
        require_non_empty("name", &new.name)?;
        if !is_usn_shaped(&new.usn) {
            return Err(RosterError::Invalid {
                field: "usn",
                reason: format!("{:?} is not a valid seat number", new.usn),
            });
        }

        let mut students = self.students.write().await;
        if students.iter().any(|s| s.usn.eq_ignore_ascii_case(&new.usn)) {
            return Err(RosterError::Duplicate {
                field: "usn",
                value: new.usn,
            });
        }

        let record = StudentRecord::new(new.usn, new.name, new.email, new.semester, new.section);
        tracing::info!(usn = %record.usn, "student enrolled");
        students.push(record.clone());
        Ok(record)
    }
}
