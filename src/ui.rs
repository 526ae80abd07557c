use console::style;
use time::OffsetDateTime;
use time::macros::format_description;

const APP_NAME: &str = "hnreader";
const APP_DESCRIPTION: &str = "Open multiple Hacker News stories in your favorite browser from the command line";

pub fn banner() {
    let version = concat!("v", env!("CARGO_PKG_VERSION"));
    println!(
        "{} - {}",
        style(APP_NAME).blue().bold(),
        style(version).blue().bold()
    );
    println!("{}\n", style(APP_DESCRIPTION).blue().bold());
}

pub fn info(msg: &str) {
    println!("{} {}", prefix(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", prefix(), style(msg).yellow().bold());
}

pub fn error(msg: &str) {
    eprintln!("{} {}", prefix(), style(msg).red().bold());
}

// `[HH:MM:SS]` UTC prefix on every log line.
fn prefix() -> String {
    let fmt = format_description!("[hour]:[minute]:[second]");
    let now = OffsetDateTime::now_utc().format(&fmt).unwrap_or_default();
    format!(
        "{}{}{}",
        style("[").yellow().bold(),
        now,
        style("]").yellow().bold()
    )
}
