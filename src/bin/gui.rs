fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // a query string argument restores a saved view
    let query = std::env::args().nth(1);

    fractal_viewer::run_gui(query.as_deref())
}
