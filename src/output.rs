use owo_colors::OwoColorize;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Header line introducing the match block for one source file.
pub fn print_match_header(source_name: &str) {
    if is_tty() {
        println!("{}", format!("Matches for '{}':", source_name).green());
    } else {
        println!("Matches for '{}':", source_name);
    }
}

/// One qualifying target under a match header.
pub fn print_match_line(target_path: &str, score: u8) {
    if is_tty() {
        println!("  - {} {}", target_path, format!("(Similarity: {}%)", score).yellow());
    } else {
        println!("  - {} (Similarity: {}%)", target_path, score);
    }
}

/// Notice for a source file with no qualifying target.
pub fn print_no_match(source_name: &str) {
    if is_tty() {
        println!("{}", format!("No match found for '{}'.", source_name).red());
    } else {
        println!("No match found for '{}'.", source_name);
    }
}
