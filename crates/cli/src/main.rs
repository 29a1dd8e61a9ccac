fn main() -> Result<(), Box<dyn std::error::Error>> {
    modpath_cli::run()
}
