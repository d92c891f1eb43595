//! gutenmark CLI - classic HTML to block-editor markup converter

use std::io::{self, Read, Write};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let restore = args.iter().skip(1).any(|a| a == "--restore");

    // Simple usage: read from stdin or file
    let path = args.iter().skip(1).find(|a| *a != "--restore" && *a != "-");
    let input = if let Some(path) = path {
        std::fs::read_to_string(path)?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    if restore {
        io::stdout().write_all(gutenmark::extract_original(&input).as_bytes())?;
    } else {
        io::stdout().write_all(gutenmark::to_blocks(&input).as_bytes())?;
    }

    Ok(())
}
