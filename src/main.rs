use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;

#[derive(Parser)]
#[command(name = "png2cursor")]
#[command(about = "Convert a PNG image to a C array of packed ARGB cursor pixels")]
struct Cli {
    /// PNG image to convert, at most 64x64 pixels
    image: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                process::exit(0);
            }
            _ => {
                println!("Usage: png2cursor cursor.png");
                process::exit(1);
            }
        },
    };

    let stdout = io::stdout();
    if let Err(e) = png2cursor::commands::convert::run(&cli.image, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(2);
    }
}
