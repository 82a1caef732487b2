//! Command session over one student service.
//!
//! # Responsibility
//! - Execute parsed commands against `StudentService`.
//! - Render results as text lines or JSON lines to any writer.
//!
//! # Invariants
//! - A bad line is reported and skipped; the session keeps reading.
//! - `exit` clears the store before stopping, mirroring end-of-session cleanup.

use crate::command::{parse_line, Command, HELP_TEXT};
use log::warn;
use rollbook_core::{StudentRepository, StudentService, StudentView};
use std::io::{self, BufRead, Write};

/// How student records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<R: StudentRepository, W: Write> {
    service: StudentService<R>,
    out: W,
    format: OutputFormat,
}

impl<R: StudentRepository, W: Write> Session<R, W> {
    pub fn new(service: StudentService<R>, out: W, format: OutputFormat) -> Self {
        Self {
            service,
            out,
            format,
        }
    }

    /// Executes every line until input ends or an `exit` command.
    ///
    /// # Errors
    /// - Propagates read and write failures; command failures are printed.
    pub fn run<B: BufRead>(&mut self, input: B) -> io::Result<()> {
        for line in input.lines() {
            if self.execute_line(&line?)? == Flow::Exit {
                break;
            }
        }
        self.out.flush()
    }

    /// Parses and executes one input line.
    ///
    /// # Errors
    /// - Propagates write failures only.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        match parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                warn!("event=command_parse module=cli status=error");
                writeln!(self.out, "Error: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    #[cfg(test)]
    pub fn service(&self) -> &StudentService<R> {
        &self.service
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Add(request) => match self.service.register_student(&request) {
                Ok(()) => writeln!(self.out, "Student added successfully.")?,
                Err(err) => writeln!(self.out, "Error: {err}")?,
            },
            Command::Enroll { roll, subject } => {
                match self.service.enroll_subject(roll, &subject) {
                    Ok(()) => writeln!(self.out, "Subject enrolled.")?,
                    Err(err) => writeln!(self.out, "Error: {err}")?,
                }
            }
            Command::Search(roll) => match self.service.find_by_roll(roll) {
                Some(record) => {
                    let view = StudentView::from(record);
                    if self.format == OutputFormat::Text {
                        writeln!(self.out, "Student found:")?;
                    }
                    write_view(&mut self.out, self.format, &view)?;
                }
                None => writeln!(self.out, "Student not found.")?,
            },
            Command::Mark { roll, attended } => {
                self.service.mark_attendance(roll, attended);
                writeln!(
                    self.out,
                    "Attendance queued for roll {roll} ({} pending).",
                    self.service.pending_attendance()
                )?;
            }
            Command::Apply => {
                let outcome = self.service.apply_all_attendance();
                let pending = self.service.pending_attendance();
                match (outcome.halted_on_missing_roll, outcome.halted_on_overflow_roll) {
                    (Some(roll), _) => writeln!(
                        self.out,
                        "Student not found for attendance record: roll {roll}. Applied {}, {pending} still pending.",
                        outcome.applied
                    )?,
                    (None, Some(roll)) => writeln!(
                        self.out,
                        "Attendance overflow for roll {roll}. Applied {}, {pending} still pending.",
                        outcome.applied
                    )?,
                    (None, None) => writeln!(
                        self.out,
                        "Attendance updated successfully. Applied {}.",
                        outcome.applied
                    )?,
                }
            }
            Command::Discard => match self.service.discard_pending_attendance() {
                Some(delta) => writeln!(
                    self.out,
                    "Discarded attendance for roll {} ({:+}).",
                    delta.roll_number, delta.attended_increment
                )?,
                None => writeln!(self.out, "No pending attendance.")?,
            },
            Command::Pending => {
                if self.service.pending_attendance() == 0 {
                    writeln!(self.out, "No pending attendance.")?;
                }
                for delta in self.service.attendance_queue().pending() {
                    writeln!(
                        self.out,
                        "roll {} {:+}",
                        delta.roll_number, delta.attended_increment
                    )?;
                }
            }
            Command::List => {
                if self.format == OutputFormat::Text {
                    writeln!(self.out, "Student List:")?;
                }
                for view in self.service.list_views() {
                    write_view(&mut self.out, self.format, &view)?;
                }
            }
            Command::Clear => {
                self.service.clear();
                writeln!(self.out, "All students cleared.")?;
            }
            Command::Help => writeln!(self.out, "{HELP_TEXT}")?,
            Command::Exit => {
                self.service.clear();
                writeln!(self.out, "Exiting program. Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }
}

fn write_view<W: Write>(
    out: &mut W,
    format: OutputFormat,
    view: &StudentView<'_>,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, view)?;
            writeln!(out)
        }
        OutputFormat::Text => {
            let record = view.record;
            writeln!(
                out,
                "Roll No: {}, Name: {}, Phone Number: {}, CGPA: {}, Year of Study: {}, Subjects Enrolled: [{}], Attendance: {} / {}, Eligible for Next Year: {}",
                record.roll_number,
                record.name,
                record.phone_number,
                record.cgpa,
                record.year_of_study,
                record.subjects_enrolled.join(", "),
                record.classes_attended,
                record.total_classes,
                if view.eligible { "Yes" } else { "No" }
            )
        }
    }
}
