use clap::Parser;
use fractal_viewer::{
    CanvasSize, CliRenderController, ParameterSet, PpmFilePresenter, ViewState, ZoomRegion,
    parse_query_string, read_parameter_set, write_parameter_set,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "fractal_viewer")]
#[command(about = "Progressive escape-time fractal renderer")]
struct Args {
    /// View parameters as a query string, e.g. `x=-0.5&y=0&s=0.002&n=200&h=true`
    #[arg(long)]
    params: Option<String>,

    /// JSON file of view parameters; `--params` entries override it
    #[arg(long)]
    params_file: Option<PathBuf>,

    /// Write the final view parameters to this JSON file
    #[arg(long)]
    save_params: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Pixel rectangle `x0,y0,x1,y1` to zoom into; repeat to zoom further
    #[arg(long, value_parser = parse_zoom)]
    zoom: Vec<ZoomRegion>,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,

    /// Wall-clock budget of one render slice
    #[arg(long, default_value_t = 16)]
    throttle_ms: u64,
}

fn parse_zoom(raw: &str) -> Result<ZoomRegion, String> {
    let coords = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid coordinate in `{}`: {}", raw, err))?;

    match coords.as_slice() {
        &[x0, y0, x1, y1] => {
            ZoomRegion::from_corners((x0, y0), (x1, y1)).map_err(|err| err.to_string())
        }
        _ => Err(format!("expected x0,y0,x1,y1 but got `{}`", raw)),
    }
}

fn load_parameters(args: &Args) -> Result<ParameterSet, Box<dyn std::error::Error>> {
    let mut params = match &args.params_file {
        Some(path) => read_parameter_set(path)?,
        None => ParameterSet::new(),
    };

    if let Some(query) = &args.params {
        params.extend(parse_query_string(query));
    }

    Ok(params)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let canvas = CanvasSize::new(args.width, args.height)?;
    let params = load_parameters(&args)?;

    let mut controller = CliRenderController::new(
        PpmFilePresenter::new(),
        ViewState::fitted_to(canvas),
        canvas,
        Duration::from_millis(args.throttle_ms),
    );

    if !params.is_empty() {
        controller.viewer_mut().apply_parameter_set(&params);
    }

    for region in &args.zoom {
        controller.viewer_mut().zoom(*region);
    }

    let state = controller.viewer().state();
    println!("Rendering {} set...", state.mode());
    println!("Image size: {}x{}", canvas.width(), canvas.height());
    println!("Max iterations: {}", state.max_iterations());

    let report = controller
        .generate()
        .ok_or("render finished without a completed frame")?;

    println!("Duration:   {:?}", report.elapsed);

    controller.write(&args.output)?;
    println!("Saved to {}", args.output.display());

    if let Some(path) = &args.save_params {
        write_parameter_set(&controller.viewer().parameter_set(), path)?;
        println!("Parameters saved to {}", path.display());
    }

    println!("View: ?{}", controller.viewer().query_string());

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    run(Args::parse())
}
