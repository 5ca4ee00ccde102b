// src/cli.rs
//
// Companion binary: same load-filter pipeline as the GUI, output as
// delimited rows instead of panels. No interactivity; one shot per run.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::catalog::{FilteredView, ProvinceFilter};
use crate::consts::{
    COL_DESCRIPTION, COL_IMAGE_PATH, COL_INGREDIENTS, COL_NAME, COL_PROVINCE, DATA_DIR,
};
use crate::csv::write_row;
use crate::load;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(&self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

pub struct Params {
    pub data_dir: PathBuf,
    pub province: Option<String>,
    pub list_provinces: bool,
    pub format: Delim,
    pub include_headers: bool,
    pub out: Option<PathBuf>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            province: None,
            list_provinces: false,
            format: Delim::Csv,
            include_headers: false,
            out: None,
        }
    }
}

const USAGE: &str = "\
Usage: cli [options]
  -d, --data <dir>        Data directory (default: data)
  -p, --province <name>   Only records from this province (exact match)
      --list-provinces    Print the distinct provinces and exit
      --format <csv|tsv>  Output format (default: csv)
      --include-headers   Emit a header row
  -o, --out <file>        Write to a file instead of stdout
  -h, --help              Show this help";

pub fn parse_args() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--data" => {
                params.data_dir = PathBuf::from(args.next().ok_or("Missing data directory")?);
            }
            "-p" | "--province" => {
                params.province = Some(args.next().ok_or("Missing province name")?);
            }
            "--list-provinces" => params.list_provinces = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "-h" | "--help" => {
                eprintln!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

pub fn run(params: &Params) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load::load_catalog(&params.data_dir);

    for w in &loaded.warnings {
        eprintln!("warning: {}", w);
    }

    if params.list_provinces {
        for p in loaded.catalog.provinces() {
            println!("{}", p);
        }
        return Ok(());
    }

    let filter = match &params.province {
        Some(p) => ProvinceFilter::One(p.clone()),
        None => ProvinceFilter::All,
    };
    let view = FilteredView::from_catalog(&loaded.catalog, &filter);

    let mut out: Box<dyn Write> = match &params.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let sep = params.format.sep();
    if params.include_headers {
        let headers: Vec<String> = [COL_NAME, COL_PROVINCE, COL_INGREDIENTS, COL_DESCRIPTION, COL_IMAGE_PATH]
            .iter()
            .map(|h| s!(*h))
            .collect();
        write_row(&mut out, &headers, sep)?;
    }
    for i in 0..view.len() {
        if let Some(record) = view.record(&loaded.catalog, i) {
            write_row(&mut out, &record.to_row(), sep)?;
        }
    }
    out.flush()?;

    Ok(())
}
