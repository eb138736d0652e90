use media_preview::{
    convert_named, LayoutEngine, MeasurementUnit, MediaSpec, Palette, Renderer, SvgRenderer,
};
use std::env;
//
// cargo run --example preview > preview.svg
// MEDIA_TYPE=Tag SENSING="Left Notch" WIDTH=2 LENGTH=4 cargo run --example preview
//

fn print_usage() {
    println!("Usage: cargo run --example preview [OUTPUT.svg]");
    println!("Reads the media spec from the environment (or a .env file):");
    println!("  MEDIA_TYPE       Label | Tag (default Label)");
    println!("  SHAPE            Square/Rectangle | Circular/Oval | Jewelry/Rat-tail | Other");
    println!("  WIDTH, LENGTH    in UNIT units (default 2 x 4)");
    println!("  UNIT             Inches | Millimeters (default Inches)");
    println!("  CONVERT_TO       convert the media spec to this unit before layout");
    println!("  PERFORATION      true | false");
    println!("  SENSING          None | Black Sensing Mark | Left & Right Notches | ...");
    println!("  FINISHED_FORMAT  Roll | Fanfold");
    println!("  BACKGROUND, INK  override the preview colours (e.g. #ffffff)");
    println!("\nWithout OUTPUT the SVG is written to stdout.");
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    let spec = match spec_from_env() {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("Invalid media spec: {}", err);
            print_usage();
            return;
        }
    };

    let spec = match env::var("CONVERT_TO") {
        Ok(token) => {
            let conversion = convert_named(&spec, &token);
            if let Some(warning) = conversion.warning {
                eprintln!("{}", warning);
            }
            conversion.spec
        }
        Err(_) => spec,
    };

    let result = match LayoutEngine::default().layout(&spec) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Layout failed: {}", err);
            return;
        }
    };

    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }

    let mut palette = Palette::default();
    if let Ok(color) = env::var("BACKGROUND") {
        palette.background = color;
    }
    if let Ok(color) = env::var("INK") {
        palette.ink = color;
    }
    let mut renderer = SvgRenderer::new(palette);
    log::debug!("Rendering with {:?}", renderer.palette());

    let svg = renderer.render(&result).expect("Failed to write SVG");

    match args.get(1) {
        Some(path) => match std::fs::write(path, svg) {
            Ok(()) => eprintln!(
                "Wrote {} unit(s), {}x{}px, to {}",
                result.units.len(),
                result.container.width,
                result.container.height,
                path
            ),
            Err(err) => eprintln!("Failed to write {}: {}", path, err),
        },
        None => print!("{}", svg),
    }
}

fn spec_from_env() -> Result<MediaSpec, String> {
    let unit: MeasurementUnit = parse_var("UNIT", "Inches")?;

    let mut spec = MediaSpec::new(unit)
        .media_type(parse_var("MEDIA_TYPE", "Label")?)
        .shape(parse_var("SHAPE", "Square/Rectangle")?)
        .width(parse_var("WIDTH", "2")?)
        .length(parse_var("LENGTH", "4")?)
        .standard_perforation(parse_var("PERFORATION", "true")?)
        .sensing_details(parse_var("SENSING", "None")?);

    if let Ok(format) = env::var("FINISHED_FORMAT") {
        spec = spec.finished_format(format.parse().map_err(|e| format!("{}", e))?);
    }

    Ok(spec)
}

fn parse_var<T>(name: &str, default: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value
        .parse()
        .map_err(|e| format!("{}={:?}: {}", name, value, e))
}
