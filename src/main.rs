use std::env;
use std::error::Error;
use std::fs;
use std::process;

use rowframe::{DataFrame, DataInput, FrameOptions};

const USAGE: &str = "usage: rowframe <FILE> [--head N | --tail N] [--group-by COLUMN] [--config PATH]";

// コマンドライン引数
#[derive(Debug, Default)]
struct Args {
    path: String,
    head: Option<usize>,
    tail: Option<usize>,
    group_by: Option<String>,
    config: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, Box<dyn Error>> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("{} needs a value", name))
        };
        match arg.as_str() {
            "--head" => parsed.head = Some(value("--head")?.parse()?),
            "--tail" => parsed.tail = Some(value("--tail")?.parse()?),
            "--group-by" => parsed.group_by = Some(value("--group-by")?),
            "--config" => parsed.config = Some(value("--config")?),
            "-h" | "--help" => return Err(USAGE.into()),
            _ if parsed.path.is_empty() => parsed.path = arg.clone(),
            other => return Err(format!("unexpected argument: {}", other).into()),
        }
    }
    if parsed.path.is_empty() {
        return Err(USAGE.into());
    }
    Ok(parsed)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let options = match &args.config {
        Some(path) => FrameOptions::from_path(path)?,
        None => FrameOptions::default(),
    };
    let text = fs::read_to_string(&args.path)?;
    let df = DataFrame::with_options(Some(DataInput::Text(text)), None, None, None, options)?;

    let (rows, columns) = df.shape();
    println!("{}: {} rows x {} columns", args.path, rows, columns);

    if let Some(column) = &args.group_by {
        for (key, group) in df.group_by(column.as_str())? {
            println!("\n== {} ({} rows)", key, group.row_count());
            print!("{}", group.preview_head()?.to_table_string());
        }
        return Ok(());
    }

    let window = match (args.head, args.tail) {
        (_, Some(n)) => df.tail(n)?,
        (Some(n), None) => df.head(n)?,
        (None, None) => df.preview_head()?,
    };
    print!("{}", window.to_table_string());
    Ok(())
}

fn main() {
    env_logger::init();

    let result = parse_args(env::args().skip(1)).and_then(run);
    if let Err(err) = result {
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
