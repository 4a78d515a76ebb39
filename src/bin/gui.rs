fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_viewport::logging::init();

    let config = mandelbrot_viewport::ExplorerConfig::from_env()?;
    let presenter_factory = mandelbrot_viewport::PixelsPresenterFactory::new();
    let command = mandelbrot_viewport::RunGuiCommand::new(presenter_factory, config);

    command.execute()?;

    Ok(())
}
