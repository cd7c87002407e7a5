//! # Hershey font chart tool

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use env_logger::Env;
use fontgen::{
    chart::{write_chart, ChartLayout, FONT_NAME},
    ps::PsWriter,
};
use log::LevelFilter;

#[derive(Parser)]
/// Write a PostScript chart of the printable ASCII characters in the
/// Hershey font
struct Options {
    /// The output file, `-` for stdout
    #[clap(short, long, default_value = "fontgen.ps")]
    out: PathBuf,
}

/// Set up CLI
fn init<T: clap::Parser>() -> color_eyre::Result<T> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("FONTGEN_LOG"))
        .init();
    let args = T::parse();
    Ok(args)
}

fn main() -> eyre::Result<()> {
    let opt: Options = init()?;
    let layout = ChartLayout::default();

    if opt.out == Path::new("-") {
        let mut pw = PsWriter::new();
        write_chart(&mut pw, &layout, FONT_NAME)?;
    } else {
        let file_res = File::create(&opt.out);
        let file = WrapErr::wrap_err_with(file_res, || {
            format!("Failed to create file: `{}`", opt.out.display())
        })?;
        let out_buf = BufWriter::new(file);
        let mut pw = PsWriter::from(out_buf);
        write_chart(&mut pw, &layout, FONT_NAME)?;
        log::info!("Wrote `{}`", opt.out.display());
    }
    Ok(())
}
