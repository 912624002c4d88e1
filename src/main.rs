use std::process::ExitCode;

use log::error;

use vacationplanner::configuration::Configuration;
use vacationplanner::holiday::holidayprovider::HolidayProvider;
use vacationplanner::vacation::dayclassifier::{DayClassifier, DayMark};
use vacationplanner::vacation::periodranker::PeriodRanker;
use vacationplanner::vacation::planner::{PlannerError, VacationPlanner};

fn usage(program: &str) {
    eprintln!("usage: {} <config.json> [--countries | --subdivisions <country>]", program);
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Plan,
    Countries,
    Subdivisions(&'a str)
}

/// Reads `<config.json> [flag]`; `None` on any other shape.
fn parse_command(args: &[String]) -> Option<(&str, Command<'_>)> {
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    match rest.as_slice() {
        [config] => Some((*config, Command::Plan)),
        [config, "--countries"] => Some((*config, Command::Countries)),
        [config, "--subdivisions", country] => Some((*config, Command::Subdivisions(*country))),
        _ => None
    }
}

fn run(config_path: &str, command: Command<'_>) -> Result<(), PlannerError> {
    let configuration = Configuration::from_reader(config_path)?;
    let provider = configuration.provider();

    match command {
        Command::Countries => {
            for (code, name) in provider.countries() {
                println!("{}\t{}", code, name);
            }
            return Ok(());
        },
        Command::Subdivisions(country) => {
            for (code, name) in provider.subdivisions(country) {
                println!("{}\t{}", code, name);
            }
            return Ok(());
        },
        Command::Plan => {}
    }

    let search = configuration.search();
    let planner = VacationPlanner::new(provider);
    let ranked = planner.plan(search)?;
    if ranked.is_empty() {
        println!("no vacation period gains any extra day off in {}", search.horizon());
        return Ok(());
    }

    let index = planner.holiday_index(search);
    let classifier = DayClassifier::new(&index);
    for group in PeriodRanker::group_by_extra_days(&ranked) {
        println!("+{} extra day(s)", group.extra_days);
        for period in group.periods.iter() {
            let candidate = period.candidate();
            let mut holidays: Vec<&str> = period
                .marked_days(classifier)
                .into_iter()
                .filter(|day| day.mark != DayMark::Plain)
                .filter_map(|day| day.holiday_name)
                .collect();
            holidays.dedup();
            println!(
                "  take {} -> {} ({} day(s)), off {} -> {}{}",
                candidate.core_start(),
                candidate.core_end(),
                candidate.day_count(),
                candidate.extended_start(),
                candidate.extended_end(),
                if holidays.is_empty() { String::new() } else { format!(" [{}]", holidays.join(", ")) }
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let Some((config_path, command)) = parse_command(&args) else {
        usage(args.first().map(String::as_str).unwrap_or("vacationplanner"));
        return ExitCode::FAILURE;
    };

    match run(config_path, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
