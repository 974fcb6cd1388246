use std::io::Write;

use colored::Colorize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a header line followed by a blank line.
pub fn header(msg: &str) {
    println!("{}\n", msg.green());
}

/// Write file contents to stdout unchanged, ending on a newline.
pub fn contents(bytes: &[u8]) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(bytes)?;
    if !bytes.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    out.flush()
}
