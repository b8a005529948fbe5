use chrono::{NaiveDateTime, TimeDelta};
use rand::{Rng, seq::IndexedRandom};

pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 7] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/api/items?page=2", 10),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery", 10),
];
const STATUS: [(u16, u8); 7] = [
    (200, 50),
    (201, 10),
    (304, 15),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const REFERRERS: [(&str, u8); 3] = [
    ("-", 10),
    ("http://example.com/", 3),
    ("http://example.com/search?q=logs", 1),
];
const AGENTS: [(&str, u8); 3] = [
    (
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0",
        10,
    ),
    ("curl/8.5.0", 3),
    ("UniversalFeedParser/4.2-pre-314-svn +http://feedparser.org/", 1),
];

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, table: &'a [(T, u8)]) -> &'a T {
    &table
        .choose_weighted(rng, |(_, w)| *w)
        .expect("static weights are positive")
        .0
}

/// Produces combined-format lines with non-decreasing timestamps.
pub struct LogGenerator<R> {
    rng: R,
    hosts: Vec<String>,
    clock: NaiveDateTime,
}

impl<R: Rng> LogGenerator<R> {
    pub fn new(mut rng: R, host_count: u16, start: NaiveDateTime) -> Self {
        let hosts = (0..host_count.max(1))
            .map(|_| {
                format!(
                    "192.168.{}.{}",
                    rng.random_range(0..256),
                    rng.random_range(0..256)
                )
            })
            .collect();
        Self {
            rng,
            hosts,
            clock: start,
        }
    }

    pub fn next_line(&mut self) -> String {
        let rng = &mut self.rng;
        self.clock += TimeDelta::seconds(rng.random_range(0..=3));

        let ip = self.hosts.choose(rng).expect("at least one host");
        let timestamp = self.clock.format(TIMESTAMP_FORMAT);
        let method = pick(rng, &METHODS);
        let path = pick(rng, &PATHS);
        let status = *pick(rng, &STATUS);
        let size = if status == 304 {
            "-".to_string()
        } else {
            rng.random_range(100..2000).to_string()
        };
        let referrer = pick(rng, &REFERRERS);
        let agent = pick(rng, &AGENTS);

        format!(
            "{ip} - - [{timestamp} +0000] \"{method} {path} HTTP/1.1\" {status} {size} \"{referrer}\" \"{agent}\""
        )
    }
}
