//! Colored terminal output helpers shared by the command handlers.

use colored::Colorize;

pub fn info(message: impl AsRef<str>) {
    println!("{} {}", "[i]".blue().bold(), message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    println!("{} {}", "[✓]".green().bold(), message.as_ref());
}

pub fn warn(message: impl AsRef<str>) {
    println!("{} {}", "[!]".yellow().bold(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{} {}", "[x]".red().bold(), message.as_ref());
}

pub fn section(title: impl AsRef<str>) {
    println!("{}", title.as_ref().bold().underline());
}

pub fn detail(label: impl AsRef<str>, value: impl AsRef<str>) {
    println!("  {}: {}", label.as_ref().dimmed(), value.as_ref());
}

pub fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_keeps_two_decimals_and_sign() {
        assert_eq!(format_money(150.0), "$150.00");
        assert_eq!(format_money(-20.0), "$-20.00");
        assert_eq!(format_money(0.5), "$0.50");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(-15.384615384615385), "-15.4%");
    }
}
