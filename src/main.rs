// Headless demo: pass an optional JSON settings file as the first argument.
fn main() {
    if let Err(err) = grid_camera_rig::run(std::env::args().nth(1)) {
        eprintln!("grid-camera-demo: {err}");
        std::process::exit(1);
    }
}
