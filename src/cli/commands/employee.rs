use super::{Session, weekday_arg};
use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::business::BusinessLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{DaySchedule, Employee};
use crate::ui::messages;
use crate::utils::colors::{colorize_optional, paint_hex};
use crate::utils::date::{WEEK, weekday_key};
use crate::utils::id::new_id;
use crate::utils::table::Table;
use crate::utils::time::{format_time, parse_hhmm, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };
    let mut session = Session::open(cfg)?;

    match action {
        EmployeeAction::Add { name, color, id } => {
            let id = id.clone().unwrap_or_else(new_id);
            let employee = Employee::new(id, name.clone(), color)?;
            BusinessLogic::add_employee(&mut session.ctx, employee, &session.sink)?;
        }
        EmployeeAction::List => {
            print_employees(&session.ctx.employees);
            return Ok(());
        }
        EmployeeAction::Del { id } => {
            BusinessLogic::remove_employee(&mut session.ctx, id, &session.sink)?;
        }
        EmployeeAction::Schedule {
            id,
            weekday,
            start,
            end,
            lunch_start,
            lunch_end,
            off,
        } => {
            let day = weekday_arg(weekday)?;
            let schedule = if *off {
                DaySchedule::day_off()
            } else {
                let (Some(start), Some(end)) = (start, end) else {
                    return Err(AppError::InvalidInput(
                        "--start and --end are required unless --off is given".into(),
                    ));
                };
                let start = parse_hhmm(start)?;
                let end = parse_hhmm(end)?;
                // Without a lunch break the window collapses onto the start.
                let lunch_start = parse_optional_time(lunch_start.as_ref())?.unwrap_or(start);
                let lunch_end = parse_optional_time(lunch_end.as_ref())?.unwrap_or(lunch_start);
                DaySchedule::working(start, end, lunch_start, lunch_end)
            };
            BusinessLogic::set_employee_day(&mut session.ctx, id, day, schedule, &session.sink)?;
        }
    }

    session.save_context()
}

fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        messages::info("No employees yet.");
        return;
    }

    for e in employees {
        messages::header(format!("{} ({})", paint_hex(&e.name, &e.color), e.id));

        let mut table = Table::new(&["Day", "Work", "Lunch"]);
        for day in WEEK {
            let s = e.day(day);
            let (work, lunch) = if !s.is_available {
                (colorize_optional("--"), colorize_optional("--"))
            } else if s.lunch_start == s.lunch_end {
                (
                    format!("{}-{}", format_time(s.work_start), format_time(s.work_end)),
                    colorize_optional("--"),
                )
            } else {
                (
                    format!("{}-{}", format_time(s.work_start), format_time(s.work_end)),
                    format!("{}-{}", format_time(s.lunch_start), format_time(s.lunch_end)),
                )
            };
            table.add_row(vec![weekday_key(day).to_string(), work, lunch]);
        }
        println!("{}\n", table.render());
    }
}
