//! # Timezone Database
//!
//! The application never converts times itself; it only needs to list the
//! IANA identifiers a user may pick from and to guess which one is local.
//! Both capabilities sit behind [`TimezoneDatabase`] so tests can supply a
//! fixed list.

use std::{env, fs, path::Path};

use chrono_tz::{Tz, TZ_VARIANTS};
use tracing::debug;

/// Source of timezone identifiers.
pub trait TimezoneDatabase: Send + Sync {
    /// Every supported IANA identifier, in no particular order.
    fn names(&self) -> Vec<String>;

    /// Best guess at the local timezone, if one can be determined.
    fn guess_local(&self) -> Option<String>;
}

/// Timezone database compiled into the binary by `chrono-tz`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChronoTzDatabase;

impl ChronoTzDatabase {
    pub fn new() -> Self {
        Self
    }
}

impl TimezoneDatabase for ChronoTzDatabase {
    fn names(&self) -> Vec<String> {
        TZ_VARIANTS.iter().map(|tz| tz.name().to_string()).collect()
    }

    fn guess_local(&self) -> Option<String> {
        let from_env = env::var("TZ")
            .ok()
            .map(|value| value.trim_start_matches(':').to_string());
        let from_link = fs::read_link("/etc/localtime")
            .ok()
            .and_then(|target| zone_from_localtime_path(&target));
        let from_file = fs::read_to_string("/etc/timezone")
            .ok()
            .map(|content| content.trim().to_string());

        let guess = [from_env, from_link, from_file]
            .into_iter()
            .flatten()
            .find(|candidate| is_known_timezone(candidate));

        debug!("Local timezone guess: {:?}", guess);
        guess
    }
}

/// Returns true if `name` is an identifier `chrono-tz` can resolve.
pub fn is_known_timezone(name: &str) -> bool {
    !name.is_empty() && name.parse::<Tz>().is_ok()
}

/// Extracts the identifier from a zoneinfo path such as
/// `/usr/share/zoneinfo/Europe/Berlin`.
pub fn zone_from_localtime_path(path: &Path) -> Option<String> {
    let path = path.to_string_lossy();
    let (_, zone) = path.split_once("zoneinfo/")?;
    let zone = zone.trim_matches('/');

    if zone.is_empty() {
        None
    } else {
        Some(zone.to_string())
    }
}
