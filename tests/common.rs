#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use salonbook::core::context::BusinessContext;
use salonbook::models::{Appointment, DaySchedule, Employee, Stylist};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("salonbook")
}

/// `salonbook --db <db> --test <args...>`
pub fn salon(db_path: &str) -> Command {
    let mut cmd = rti();
    cmd.args(["--db", db_path, "--test"]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_salonbook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and register one stylist, `anna`, with the default
/// Mon-Fri 09:00-18:00 schedule (lunch 12:00-13:00).
pub fn init_salon(db_path: &str) {
    salon(db_path).arg("init").assert().success();
    salon(db_path)
        .args(["employee", "add", "Anna", "--color", "#e11d48", "--id", "anna"])
        .assert()
        .success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("test time")
}

pub fn appt(id: &str, date: &str, time: &str, minutes: u32) -> Appointment {
    Appointment::new(id, id, Stylist::Unassigned, d(date), t(time), minutes)
}

pub fn appt_for(id: &str, stylist: &str, date: &str, time: &str, minutes: u32) -> Appointment {
    Appointment::new(
        id,
        id,
        Stylist::Specific(stylist.to_string()),
        d(date),
        t(time),
        minutes,
    )
}

/// Default week (Mon-Fri 09-18, Sat 09-14, Sun closed) and one employee
/// `e1` working Mon-Fri 09:00-17:00 with lunch 12:00-13:00, off on Tuesday.
pub fn sample_context() -> BusinessContext {
    let mut e1 = Employee::new("e1", "Marta", "#2563eb").expect("valid color");
    for day in [
        chrono::Weekday::Mon,
        chrono::Weekday::Wed,
        chrono::Weekday::Thu,
        chrono::Weekday::Fri,
    ] {
        *e1.schedule.get_mut(day) = DaySchedule::working(t("09:00"), t("17:00"), t("12:00"), t("13:00"));
    }
    *e1.schedule.get_mut(chrono::Weekday::Tue) = DaySchedule::day_off();

    BusinessContext {
        employees: vec![e1],
        ..BusinessContext::default()
    }
}
