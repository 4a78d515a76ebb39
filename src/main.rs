use mandelbrot_viewport::{ExplorerConfig, ExplorerController, HeadlessRenderEngine, InputEvent};

const OUTPUT_PATH: &str = "output/viewport.ppm";

/// Replays a short drag-and-zoom gesture without a window and saves the
/// final frame.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_viewport::logging::init();

    let config = ExplorerConfig::from_env()?;
    let engine = HeadlessRenderEngine::new(config.window.width, config.window.height);
    let mut controller = ExplorerController::new(&config, engine);

    controller.start();

    let (width, height) = (f64::from(config.window.width), f64::from(config.window.height));
    let (cx, cy) = (width / 2.0, height / 2.0);

    for event in [
        InputEvent::press(cx, cy),
        InputEvent::move_to(cx + width / 20.0, cy),
        InputEvent::move_to(cx + width / 10.0, cy - height / 20.0),
        InputEvent::release(cx + width / 10.0, cy - height / 20.0),
        InputEvent::wheel(-100.0, cx, cy),
        InputEvent::wheel(-100.0, cx + width / 4.0, cy),
    ] {
        controller.dispatch(&event);
    }

    let view = controller.viewport().state();
    tracing::info!(
        real = view.center.real,
        imag = view.center.imag,
        zoom = view.zoom,
        frames = controller.frames_requested(),
        "gesture replayed"
    );

    std::fs::create_dir_all("output")?;
    mandelbrot_viewport::write_ppm(controller.engine().frame(), view.extent, OUTPUT_PATH)?;

    Ok(())
}
