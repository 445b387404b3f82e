use crate::core::{AttendanceRecord, Course, Result, Section, Student};
use serde::Deserialize;
use std::collections::BTreeMap;

// 來源資料的巢狀結構：課程 → 班級 → 學生 → 出勤紀錄。
// 欄位名稱是資料契約的一部分，缺欄位或型別錯誤直接整批失敗。
#[derive(Debug, Deserialize)]
struct RawSection {
    // Descriptive metadata only; never checked against data.len().
    #[allow(dead_code)]
    total_students: u64,
    data: Vec<RawStudent>,
}

#[derive(Debug, Deserialize)]
struct RawStudent {
    id: i64,
    name: String,
    attendance: Vec<RawAttendance>,
}

#[derive(Debug, Deserialize)]
struct RawAttendance {
    date: String,
    is_present: bool,
}

// BTreeMap keeps course-key and section-code iteration deterministic, which
// fixes the relative order of duplicate section codes before the final sort.
type RawDataset = BTreeMap<String, BTreeMap<String, RawSection>>;

/// Deserializes the raw dataset text into an unsorted [`Course`].
///
/// The course keys themselves are only iteration keys; every section found
/// under any course key becomes its own [`Section`], duplicates included.
pub fn parse(raw: &str) -> Result<Course> {
    let dataset: RawDataset = serde_json::from_str(raw)?;

    let mut course = Course::default();
    for sections in dataset.into_values() {
        for (code, info) in sections {
            let students = info
                .data
                .into_iter()
                .map(|student| Student {
                    id: student.id,
                    name: student.name,
                    attendance: student
                        .attendance
                        .into_iter()
                        .map(|record| AttendanceRecord {
                            date: record.date,
                            present: record.is_present,
                        })
                        .collect(),
                })
                .collect();

            course.sections.push(Section { code, students });
        }
    }

    Ok(course)
}
