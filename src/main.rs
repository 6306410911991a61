extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate football;

use clap::{App, Arg};
use failure::Error;
use football::Season;
use std::ffi::OsString;
use std::process;

const USAGE: &str = "usage: football <stats-file> <team>";

/// What a finished invocation should print.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The total points the requested team earned.
    Points(u32),
    /// The arguments were unusable; print the usage string.
    Usage,
}

fn main() {
    env_logger::init();
    match run(std::env::args_os()) {
        Ok(Outcome::Points(points)) => println!("{}", points),
        Ok(Outcome::Usage) => println!("{}", USAGE),
        Err(err) => {
            eprintln!("football: {}", err);
            for cause in err.iter_causes() {
                eprintln!("  caused by: {}", cause);
            }
            process::exit(1);
        }
    }
}

fn run<I, T>(args: I) -> Result<Outcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match App::new("football")
        .arg(
            Arg::with_name("STATS_FILE")
                .help("Sets the input stats file, one match result per line")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("TEAM")
                .help("Sets the team to total points for")
                .required(true)
                .index(2),
        )
        .get_matches_from_safe(args)
    {
        Ok(matches) => matches,
        Err(_) => return Ok(Outcome::Usage),
    };
    let season = Season::from_path(matches.value_of("STATS_FILE").unwrap())?;
    Ok(Outcome::Points(season.points(matches.value_of("TEAM").unwrap())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_when_arguments_are_missing() {
        assert_eq!(Outcome::Usage, run(vec!["football"]).unwrap());
        assert_eq!(
            Outcome::Usage,
            run(vec!["football", "tests/data/results.txt"]).unwrap()
        );
    }

    #[test]
    fn points_for_each_team() {
        assert_eq!(
            Outcome::Points(4),
            run(vec!["football", "tests/data/results.txt", "Arsenal"]).unwrap()
        );
        assert_eq!(
            Outcome::Points(1),
            run(vec!["football", "tests/data/results.txt", "Chelsea"]).unwrap()
        );
        assert_eq!(
            Outcome::Points(0),
            run(vec!["football", "tests/data/results.txt", "Liverpool"]).unwrap()
        );
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(run(vec!["football", "tests/data/missing.txt", "Arsenal"]).is_err());
    }

    #[test]
    fn malformed_file_is_fatal() {
        let err = run(vec!["football", "tests/data/malformed.txt", "Arsenal"]).unwrap_err();
        assert!(err
            .to_string()
            .contains("Leeds United - Norwich 30"));
    }
}
