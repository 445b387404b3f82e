use crate::core::query;
use crate::core::{Course, Result, Section};
use std::io::{BufRead, Write};

/// Menu-driven read-eval loop over a loaded [`Course`]. Generic over the
/// input/output streams so sessions can be scripted in tests.
pub struct Shell<R: BufRead, W: Write> {
    course: Course,
    input: R,
    output: W,
}

fn status_label(present: bool) -> &'static str {
    if present {
        "Present"
    } else {
        "Absent"
    }
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(course: Course, input: R, output: W) -> Self {
        Self {
            course,
            input,
            output,
        }
    }

    /// 互動選單主迴圈。選 4 或輸入結束 (EOF) 才離開。
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => self.search_student()?,
                "2" => self.list_section()?,
                "3" => self.list_all()?,
                "4" => return Ok(()),
                _ => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please choose a valid operation."
                    )?;
                }
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "S C H O O L  A T T E N D A N C E")?;
        writeln!(self.output, "\nPlease choose an operation to perform:")?;
        writeln!(self.output, "1. Search for a student by name")?;
        writeln!(self.output, "2. Select all students in a section")?;
        writeln!(self.output, "3. Select all students")?;
        writeln!(self.output, "4. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line, without the trailing newline. `None` means the input
    /// stream is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn pause(&mut self) -> Result<()> {
        writeln!(self.output, "Press Enter to continue...")?;
        self.read_line()?;
        Ok(())
    }

    fn search_student(&mut self) -> Result<()> {
        write!(self.output, "Enter the name of the student to search for: ")?;
        self.output.flush()?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };

        let matches = query::search_by_name(&self.course, &name);
        if matches.is_empty() {
            writeln!(
                self.output,
                "No students found with the name containing '{}'.",
                name
            )?;
        } else {
            for m in matches {
                writeln!(
                    self.output,
                    "\nStudent ID: {}\nStudent Name: {}\nSection {}:\n",
                    m.student.id, m.student.name, m.section.code
                )?;
                for record in &m.student.attendance {
                    writeln!(
                        self.output,
                        "Date: {}\tStatus: {}",
                        record.date,
                        status_label(record.present)
                    )?;
                }
                writeln!(self.output, "\n")?;
            }
        }

        self.pause()
    }

    fn list_section(&mut self) -> Result<()> {
        write!(self.output, "Enter the section code: ")?;
        self.output.flush()?;
        let Some(code) = self.read_line()? else {
            return Ok(());
        };

        match query::find_section_by_code(&self.course, &code) {
            Some(section) => {
                writeln!(self.output, "\nStudents in Section {}:", code)?;
                for student in &section.students {
                    writeln!(
                        self.output,
                        "Student ID: {}\nStudent Name: {}",
                        student.id, student.name
                    )?;
                }
            }
            None => {
                writeln!(
                    self.output,
                    "No section found with the code '{}'.",
                    code
                )?;
            }
        }

        self.pause()
    }

    fn list_all(&mut self) -> Result<()> {
        for section in &self.course.sections {
            render_section(&mut self.output, section)?;
        }
        self.pause()
    }
}

fn render_section<W: Write>(out: &mut W, section: &Section) -> Result<()> {
    writeln!(out, "\nSection: {}", section.code)?;
    // Count of loaded students, not the dataset's total_students metadata
    writeln!(out, "Total Students: {}\n", section.students.len())?;

    for student in &section.students {
        writeln!(out, " Student ID: {}", student.id)?;
        writeln!(out, " Student Name: {}", student.name)?;
        for record in &student.attendance {
            writeln!(
                out,
                "  Date: {}  Status: {}",
                record.date,
                status_label(record.present)
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_course() -> Course {
        let raw = r#"{
            "CS101": {
                "B": {"total_students": 2, "data": [
                    {"id": 1, "name": "Ada Lovelace", "attendance": [
                        {"date": "2024-01-01", "is_present": true},
                        {"date": "2024-01-02", "is_present": false}
                    ]},
                    {"id": 2, "name": "Grace Hopper", "attendance": [
                        {"date": "2024-01-01", "is_present": true}
                    ]}
                ]},
                "A": {"total_students": 1, "data": [
                    {"id": 3, "name": "Alan Turing", "attendance": [
                        {"date": "2024-01-01", "is_present": false}
                    ]}
                ]}
            }
        }"#;
        let mut course = crate::core::parser::parse(raw).unwrap();
        course.sort_sections();
        course
    }

    /// Feeds a scripted session to the shell and returns everything it wrote.
    fn run_session(input: &str) -> String {
        let mut output = Vec::new();
        let mut shell = Shell::new(sample_course(), Cursor::new(input.as_bytes()), &mut output);
        shell.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let output = run_session("4\n");

        assert!(output.contains("S C H O O L  A T T E N D A N C E"));
        assert!(output.contains("1. Search for a student by name"));
        assert_eq!(output.matches("Enter your choice:").count(), 1);
    }

    #[test]
    fn test_eof_terminates_loop() {
        let output = run_session("");

        assert!(output.contains("Enter your choice:"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let output = run_session("banana\n4\n");

        assert!(output.contains("Invalid choice. Please choose a valid operation."));
        // Menu shown again after the invalid input
        assert_eq!(output.matches("Enter your choice:").count(), 2);
    }

    #[test]
    fn test_search_renders_student_with_attendance() {
        let output = run_session("1\nada\n\n4\n");

        assert!(output.contains("Enter the name of the student to search for:"));
        assert!(output.contains("Student Name: Ada Lovelace"));
        assert!(output.contains("Section B:"));
        assert!(output.contains("Date: 2024-01-01\tStatus: Present"));
        assert!(output.contains("Date: 2024-01-02\tStatus: Absent"));
        assert!(output.contains("Press Enter to continue..."));
    }

    #[test]
    fn test_search_no_results_message() {
        let output = run_session("1\nBabbage\n\n4\n");

        assert!(output.contains("No students found with the name containing 'Babbage'."));
    }

    #[test]
    fn test_section_listing_is_case_insensitive() {
        let output = run_session("2\nb\n\n4\n");

        assert!(output.contains("Students in Section b:"));
        assert!(output.contains("Student Name: Ada Lovelace"));
        assert!(output.contains("Student Name: Grace Hopper"));
        assert!(!output.contains("Alan Turing"));
    }

    #[test]
    fn test_section_not_found_message() {
        let output = run_session("2\nZZ\n\n4\n");

        assert!(output.contains("No section found with the code 'ZZ'."));
    }

    #[test]
    fn test_list_all_renders_sections_in_sorted_order() {
        let output = run_session("3\n\n4\n");

        let a = output.find("Section: A").unwrap();
        let b = output.find("Section: B").unwrap();
        assert!(a < b);

        assert!(output.contains("Total Students: 1"));
        assert!(output.contains("Total Students: 2"));
        assert!(output.contains(" Student ID: 3"));
        assert!(output.contains("  Date: 2024-01-01  Status: Absent"));
    }

    #[test]
    fn test_loop_continues_after_each_operation() {
        let output = run_session("3\n\n1\ngrace\n\n4\n");

        assert!(output.contains("Student Name: Grace Hopper"));
        // Menu rendered three times: list, search, exit
        assert_eq!(output.matches("Enter your choice:").count(), 3);
    }
}
