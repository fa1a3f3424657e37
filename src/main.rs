fn main() {
    taku::app::cli::run();
}
