use std::{io::Write, process::Command};

use log_query::{Address, Window, build_indexes, build_record_set};
use tempfile::NamedTempFile;

const LOG: &str = r#"83.149.9.216 - - [17/May/2015:10:05:03 +0000] "GET /presentations/logstash-monitorama-2013/images/kibana-search.png HTTP/1.1" 200 203023 "http://semicomplete.com/presentations/logstash-monitorama-2013/" "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/32.0.1700.77 Safari/537.36"
83.149.9.216 - - [17/May/2015:10:05:43 +0000] "GET /presentations/logstash-monitorama-2013/images/kibana-dashboard3.png HTTP/1.1" 200 171717 "http://semicomplete.com/presentations/logstash-monitorama-2013/" "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/32.0.1700.77 Safari/537.36"
24.236.252.67 - - [17/May/2015:10:05:40 +0000] "GET /favicon.ico HTTP/1.1" 200 3638 "-" "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:26.0) Gecko/20100101 Firefox/26.0"
46.105.14.53 - - [17/May/2015:10:05:44 +0000] "GET /blog/tags/puppet?flav=rss20 HTTP/1.1" 200 14872 "-" "UniversalFeedParser/4.2-pre-314-svn +http://feedparser.org/"
46.105.14.53 - - [17/May/2015:10:05:50 +0000] "GET /blog/tags/puppet?flav=rss20 HTTP/1.1" 304 - "-" "UniversalFeedParser/4.2-pre-314-svn +http://feedparser.org/"
"#;

fn log_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create log file");
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn log_query(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_log-query"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to start log-query")
}

#[test]
fn lists_addresses_as_json() {
    let file = log_file(LOG);
    let output = log_query(&[file.path().to_str().unwrap(), "--ip-with-freq", "-o", "json"]);
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(
        rows,
        vec![
            serde_json::json!({"ip": "83.149.9.216", "frequency": 2}),
            serde_json::json!({"ip": "24.236.252.67", "frequency": 1}),
            serde_json::json!({"ip": "46.105.14.53", "frequency": 2}),
        ]
    );
}

#[test]
fn filters_top_endpoints_by_address() {
    let file = log_file(LOG);
    let output = log_query(&[file.path().to_str().unwrap(), "-t", "46.105.14.53", "-l", "3"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        concat!(
            "\n[+] APIs filtered by IP =>  Top 3 as per frequency of hit\n",
            "46.105.14.53 - /blog/tags/puppet?flav=rss20 - 2\n",
            "\n[+] APIs filtered by IP =>  Top 3 as per time\n",
            "46.105.14.53 - /blog/tags/puppet?flav=rss20 - 17/May/2015:10:05:50\n",
            "46.105.14.53 - /blog/tags/puppet?flav=rss20 - 17/May/2015:10:05:44\n",
        )
    );
}

#[test]
fn window_without_hits_reports_no_results() {
    let file = log_file(LOG);
    let output = log_query(&[
        file.path().to_str().unwrap(),
        "-p",
        "18/May/2015:00:00:00",
        "19/May/2015:00:00:00",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("No results found").count(), 2);
}

#[test]
fn faulty_line_fails_the_run() {
    let file = log_file(&format!("{LOG}garbage\n"));
    let output = log_query(&[file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Command line error => Faulty line 6: garbage"), "{stderr}");
}

#[test]
fn missing_file_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.log");
    let output = log_query(&[missing.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not found"), "{stderr}");
}

#[test]
fn non_positive_limit_fails_the_run() {
    let file = log_file(LOG);
    let output = log_query(&[file.path().to_str().unwrap(), "--limit", "-1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Limit can be only positive integer"), "{stderr}");
}

#[test]
fn library_counts_hits_per_address_inside_window() {
    let window = Window::parse("17/May/2015:10:05:40", "17/May/2015:10:06:00").unwrap();
    let records = build_record_set(LOG.lines(), Some(&window)).unwrap();
    let indexes = build_indexes(&records);

    assert_eq!(records.len(), 3);
    assert_eq!(indexes.frequency.get(&Address::new("83.149.9.216")), 1);
    assert_eq!(indexes.frequency.get(&Address::new("46.105.14.53")), 2);
    assert_eq!(indexes.frequency.get(&Address::new("24.236.252.67")), 0);
    assert_eq!(indexes.frequency.total(), records.len());
    assert_eq!(indexes.endpoint_hits.total(), records.len());
}
