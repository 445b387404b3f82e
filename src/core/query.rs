use crate::core::{AttendanceRecord, Course, Section, Student};

/// One student hit from a name search, with the section it was found in.
#[derive(Debug, Clone, Copy)]
pub struct NameMatch<'a> {
    pub section: &'a Section,
    pub student: &'a Student,
}

/// One attendance record hit from a status filter. A student with several
/// matching records shows up once per record.
#[derive(Debug, Clone, Copy)]
pub struct AttendanceMatch<'a> {
    pub section: &'a Section,
    pub student: &'a Student,
    pub record: &'a AttendanceRecord,
}

/// Case-insensitive substring match on student names. An empty query
/// matches every student. Traversal follows the sorted section order.
pub fn search_by_name<'a>(course: &'a Course, query: &str) -> Vec<NameMatch<'a>> {
    let needle = query.to_lowercase();

    let mut matches = Vec::new();
    for section in &course.sections {
        for student in &section.students {
            if student.name.to_lowercase().contains(&needle) {
                matches.push(NameMatch { section, student });
            }
        }
    }
    matches
}

/// Exact section-code lookup ignoring case. Duplicate codes resolve to the
/// first section in sorted order.
pub fn find_section_by_code<'a>(course: &'a Course, code: &str) -> Option<&'a Section> {
    course
        .sections
        .iter()
        .find(|section| section.code.eq_ignore_ascii_case(code))
}

/// Every attendance record across the course with the given status, in
/// section then student then record order.
pub fn filter_by_attendance(course: &Course, present: bool) -> Vec<AttendanceMatch<'_>> {
    let mut matches = Vec::new();
    for section in &course.sections {
        for student in &section.students {
            for record in &student.attendance {
                if record.present == present {
                    matches.push(AttendanceMatch {
                        section,
                        student,
                        record,
                    });
                }
            }
        }
    }
    matches
}
