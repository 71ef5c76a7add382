use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use timetext_core::timezone::{
    ChronoTzDatabase, TimezoneDatabase, is_known_timezone, zone_from_localtime_path,
};

#[test]
fn test_chrono_tz_database_lists_common_zones() {
    let names = ChronoTzDatabase::new().names();

    assert!(names.len() > 300);
    assert!(names.iter().any(|name| name == "America/New_York"));
    assert!(names.iter().any(|name| name == "UTC"));
}

#[test]
fn test_guess_local_is_known_when_present() {
    if let Some(guess) = ChronoTzDatabase::new().guess_local() {
        assert!(is_known_timezone(&guess));
    }
}

#[rstest]
#[case("America/New_York", true)]
#[case("Europe/Berlin", true)]
#[case("Mars/Olympus", false)]
#[case("", false)]
fn test_is_known_timezone(#[case] name: &str, #[case] known: bool) {
    assert_eq!(is_known_timezone(name), known);
}

#[rstest]
#[case("/usr/share/zoneinfo/Europe/Berlin", Some("Europe/Berlin"))]
#[case("../usr/share/zoneinfo/UTC", Some("UTC"))]
#[case(
    "/var/db/timezone/zoneinfo/America/Argentina/Buenos_Aires",
    Some("America/Argentina/Buenos_Aires")
)]
#[case("/usr/share/zoneinfo/", None)]
#[case("/etc/localtime", None)]
fn test_zone_from_localtime_path(#[case] path: &str, #[case] expected: Option<&str>) {
    assert_eq!(
        zone_from_localtime_path(Path::new(path)).as_deref(),
        expected
    );
}
