use std::env;

use anyhow::{Context, Result};
use gridlink::loader::TransmissionLoader;
use gridlink::replayer::MoveReplayer;
use gridlink::scanner::FrameScanner;
#[cfg(feature = "visualization")]
use gridlink::visualization::render_grid;

fn print_usage() {
    eprintln!(
        "Usage:\n  gridlink [--trace] <transmission.bin>\n\nFlags:\n  --trace              Render the grid after every applied move\n  -h, --help           Show this help\n\nExamples:\n  gridlink transmission.bin\n  gridlink --trace transmission.bin\n"
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let mut trace = false;
    let mut file_arg: Option<String> = None;
    let mut show_help = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--trace" => {
                trace = true;
            }
            "--help" | "-h" => {
                show_help = true;
            }
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                show_help = true;
            }
            _ => {
                file_arg = Some(arg);
            }
        }
    }

    let file_path = match file_arg {
        Some(path) if !show_help => path,
        _ => {
            print_usage();
            return Ok(());
        }
    };

    #[cfg(not(feature = "visualization"))]
    {
        if trace {
            eprintln!(
                "The --trace flag requires the \"visualization\" feature. Rebuild with default features to enable it."
            );
        }
    }

    let data = TransmissionLoader::load(&file_path).context("could not load transmission")?;

    let mut scanner = FrameScanner::new(&data);
    let mut replayer = MoveReplayer::new();
    while let Some(command) = scanner.try_next()? {
        let applied = replayer.feed(command);
        #[cfg(feature = "visualization")]
        {
            if trace && applied.is_some() {
                println!("{}", render_grid(&replayer.position()));
            }
        }
        #[cfg(not(feature = "visualization"))]
        let _ = applied;
    }
    let position = replayer.finish();

    #[cfg(feature = "visualization")]
    println!("{}", render_grid(&position));
    println!("Final position: {}", position);

    Ok(())
}
