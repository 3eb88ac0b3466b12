//! Interactive controller - binds console choices to hospital operations.
//!
//! Generic over its input and output so whole sessions can be scripted in
//! tests. Invalid input re-prompts without touching the simulation.

use std::io::{self, BufRead, Write};

use medsim_core::prelude::*;
use medsim_logic::constants::clock::DAY_LENGTH_HOURS;
use medsim_logic::scoring::Outcome;

pub struct Controller<'h, R: BufRead, W: Write> {
    hospital: &'h mut Hospital,
    input: R,
    output: W,
    /// Set once input is exhausted; the current day ends and the run stops.
    input_closed: bool,
}

enum Choice {
    EndDay,
    Wait,
    Patient(usize),
    Invalid,
}

/// Wait is a letter so every patient number stays selectable, however
/// large the waiting room.
fn parse_waiting_room_choice(line: &str) -> Choice {
    match line {
        "0" => Choice::EndDay,
        "w" | "W" => Choice::Wait,
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Choice::Patient(n - 1),
            _ => Choice::Invalid,
        },
    }
}

impl<'h, R: BufRead, W: Write> Controller<'h, R, W> {
    pub fn new(hospital: &'h mut Hospital, input: R, output: W) -> Self {
        Self {
            hospital,
            input,
            output,
            input_closed: false,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Clinical Decision-Making Simulator")?;
        writeln!(self.output, "---------------------------------")?;

        while !self.hospital.is_simulation_over() && !self.input_closed {
            self.run_day()?;
        }

        writeln!(self.output, "\nSimulation finished.")?;
        writeln!(self.output, "Total score: {}", self.hospital.total_score())?;
        self.output.flush()
    }

    fn run_day(&mut self) -> io::Result<()> {
        self.hospital.start_new_day();

        while !self.hospital.is_day_over() {
            self.show_status()?;
            let Some(line) = self.prompt("\nSelect patient or action: ")? else {
                break;
            };

            match parse_waiting_room_choice(&line) {
                Choice::EndDay => break,
                Choice::Wait => {
                    writeln!(self.output, "\nWaiting for 1 hour...")?;
                    self.with_death_notices(|h| h.wait_and_observe(1))?;
                }
                Choice::Patient(index) => {
                    match self.hospital.waiting_room().get_patient(index).map(|p| p.id) {
                        Some(id) => self.visit_patient(id)?,
                        None => writeln!(self.output, "Invalid patient.")?,
                    }
                }
                Choice::Invalid => writeln!(self.output, "Invalid input.")?,
            }
        }

        let summary = self.hospital.end_day();
        print_day_summary(&mut self.output, &summary)
    }

    fn show_status(&mut self) -> io::Result<()> {
        let clock = self.hospital.clock();
        writeln!(
            self.output,
            "\n=== Day {} | Hour {}/{} ===",
            clock.day, clock.hour, DAY_LENGTH_HOURS
        )?;
        writeln!(self.output, "\n--- Waiting Room ---")?;
        for (i, patient) in self.hospital.waiting_room().patients().iter().enumerate() {
            writeln!(self.output, "{}) {}", i + 1, patient.name())?;
        }
        writeln!(self.output, "w) Wait and Observe")?;
        writeln!(self.output, "0) End day")
    }

    /// One visit: repeat actions on a patient until they leave, die, the
    /// player steps back, or the day ends.
    fn visit_patient(&mut self, id: PatientId) -> io::Result<()> {
        while !self.hospital.is_day_over() {
            let Some(patient) = self.hospital.patient(id) else {
                return Ok(());
            };
            if patient.is_dead() {
                writeln!(self.output, "\n{} is unresponsive.", patient.name())?;
                return Ok(());
            }
            print_patient_record(&mut self.output, patient)?;
            print_actions(&mut self.output, self.hospital.treatments())?;

            let Some(line) = self.prompt("\nChoose action: ")? else {
                return Ok(());
            };
            if line == "0" {
                return Ok(());
            }
            let Ok(choice) = line.parse::<usize>() else {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                continue;
            };

            let treatment_count = self.hospital.treatments().len();
            if choice == treatment_count + 1 {
                if self.guess(id)? {
                    return Ok(());
                }
            } else if (1..=treatment_count).contains(&choice) {
                let report = self.with_death_notices(|h| h.perform_action(id, choice - 1))?;
                if let Some(report) = report {
                    print_report(&mut self.output, &report)?;
                }
            } else {
                writeln!(self.output, "Invalid action.")?;
            }
        }
        Ok(())
    }

    /// Returns true if the visit is over (patient discharged or gone).
    fn guess(&mut self, id: PatientId) -> io::Result<bool> {
        let Some(guess) = self.prompt("Enter the disease name: ")? else {
            return Ok(true);
        };

        match self.hospital.guess_diagnosis(id, &guess) {
            Some(DiagnosisVerdict::Correct { disease, case }) => {
                writeln!(self.output, "Correct! The patient had {}.", disease)?;
                writeln!(
                    self.output,
                    "{} discharged → {} points",
                    case.patient_name, case.score
                )?;
                Ok(true)
            }
            Some(DiagnosisVerdict::Incorrect { health, day_ended }) => {
                writeln!(self.output, "Incorrect. Patient health is now {}.", health)?;
                if day_ended {
                    writeln!(self.output, "The day is over.")?;
                }
                Ok(day_ended)
            }
            None => Ok(true),
        }
    }

    /// Run a time-advancing operation and announce anyone who died meanwhile.
    fn with_death_notices<T>(&mut self, op: impl FnOnce(&mut Hospital) -> T) -> io::Result<T> {
        let before = self.hospital.daily_case_results().len();
        let value = op(&mut *self.hospital);
        for case in &self.hospital.daily_case_results()[before..] {
            if case.outcome == Outcome::Died {
                writeln!(self.output, "\nPatient {} has died.", case.patient_name)?;
            }
        }
        Ok(value)
    }

    /// Print a prompt and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.input_closed = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn print_patient_record<W: Write>(out: &mut W, patient: &Patient) -> io::Result<()> {
    writeln!(out, "\n--- Patient record ---")?;
    match &patient.identity {
        Some(identity) => writeln!(
            out,
            "{} ({}, {} years)",
            identity.name,
            identity.sex.label(),
            identity.age
        )?,
        None => writeln!(out, "{}", patient.name())?,
    }
    writeln!(
        out,
        "Health: {} ({})",
        patient.health(),
        patient.health_tier().label()
    )?;
    writeln!(out, "Hours under observation: {}", patient.time_elapsed())?;

    writeln!(out, "\nClinical symptoms:")?;
    for symptom in patient.visible_symptoms() {
        writeln!(out, "- {}", symptom)?;
    }

    for modality in [Modality::Blood, Modality::Xray, Modality::Ecg] {
        let findings = patient.discovered_findings(modality);
        if !findings.is_empty() {
            writeln!(out, "\n{} findings:", modality.label())?;
            for finding in findings {
                writeln!(out, "- {}", finding)?;
            }
        }
    }

    if let Some(vitals) = patient.vital_signs() {
        writeln!(out, "\nVital signs:")?;
        writeln!(out, "- Temperature: {} °C", vitals.temperature)?;
        writeln!(out, "- Systolic BP: {} mmHg", vitals.systolic_bp)?;
    }
    Ok(())
}

fn print_actions<W: Write>(out: &mut W, treatments: &[Treatment]) -> io::Result<()> {
    writeln!(out, "\nAvailable actions:")?;
    for (i, treatment) in treatments.iter().enumerate() {
        writeln!(out, "{}) {}", i + 1, treatment)?;
    }
    writeln!(out, "{}) Guess Disease", treatments.len() + 1)?;
    writeln!(out, "0) Back to waiting room")
}

fn print_report<W: Write>(out: &mut W, report: &ActionReport) -> io::Result<()> {
    match report {
        ActionReport::Findings { modality, findings } => {
            writeln!(out, "\n{} findings:", modality.label())?;
            for finding in findings {
                writeln!(out, "- {}", finding)?;
            }
        }
        ActionReport::Vitals(vitals) => {
            writeln!(out, "\nVital signs:")?;
            writeln!(out, "- Temperature: {} °C", vitals.temperature)?;
            writeln!(out, "- Systolic BP: {} mmHg", vitals.systolic_bp)?;
        }
        ActionReport::Therapy(outcome) => {
            writeln!(out, "\n{}", outcome.label())?;
        }
    }
    Ok(())
}

fn print_day_summary<W: Write>(out: &mut W, summary: &DaySummary) -> io::Result<()> {
    writeln!(out, "\n--- Day {} Summary ---", summary.day)?;
    for case in &summary.results {
        writeln!(
            out,
            "{}: {} → {} points",
            case.patient_name,
            case.outcome.label(),
            case.score
        )?;
    }
    writeln!(out, "Total day score: {}", summary.day_score)
}
