fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    uraban_frontend::run_frontend()
}
