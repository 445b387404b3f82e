/// A single date/presence observation for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub date: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub attendance: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub code: String,
    pub students: Vec<Student>,
}

/// Root aggregate. Built once at startup, sorted once, then read-only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Course {
    pub sections: Vec<Section>,
}

impl Course {
    /// Sorts sections ascending by code. Called exactly once after parsing;
    /// queries rely on this order for the first-match-wins tie-break.
    pub fn sort_sections(&mut self) {
        self.sections.sort_by(|a, b| a.code.cmp(&b.code));
    }

    pub fn student_count(&self) -> usize {
        self.sections.iter().map(|s| s.students.len()).sum()
    }
}
