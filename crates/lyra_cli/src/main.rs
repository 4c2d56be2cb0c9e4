use std::env;
use std::path::PathBuf;
use std::process;

use lyra_forms::{FormView, HeadlessToolkit, LayoutChoice};

fn usage() -> ! {
    eprintln!("Usage: lyra <schema.json> [--layout stacked|grid|paired] [--out <file>]");
    process::exit(1);
}

fn main() {
    env_logger::init();

    let mut schema_path: Option<PathBuf> = None;
    let mut out_path = PathBuf::from("form_output.json");
    let mut layout = LayoutChoice::Stacked;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--layout" {
            let Some(value) = args.next().as_deref().and_then(LayoutChoice::parse) else {
                usage();
            };
            layout = value;
        } else if arg == "--out" {
            let Some(value) = args.next() else { usage() };
            out_path = PathBuf::from(value);
        } else if schema_path.is_none() && !arg.starts_with('-') {
            schema_path = Some(PathBuf::from(arg));
        } else {
            usage();
        }
    }
    let Some(schema_path) = schema_path else { usage() };

    let schema = match lyra_schema::load_schema(&schema_path) {
        Ok(schema) => schema,
        Err(err) => {
            eprintln!("Error: failed to load {}: {err}", schema_path.display());
            process::exit(1);
        }
    };

    let form = FormView::build(&schema, HeadlessToolkit::new(), layout);
    log::info!(
        "built {} layout with {} registered field(s), {} button(s)",
        form.layout_choice().as_str(),
        form.fields().len(),
        form.buttons().len()
    );

    let data = form.form_data();
    match serde_json::to_string_pretty(&data) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Error: failed to render output: {err}");
            process::exit(1);
        }
    }
    if let Err(err) = lyra_schema::save_data(&data, &out_path) {
        eprintln!("Error: failed to write {}: {err}", out_path.display());
        process::exit(1);
    }
}
