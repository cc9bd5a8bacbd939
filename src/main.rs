fn main() -> anyhow::Result<()> {
    tuido::logging::init_tracing();
    tuido::ui::runtime::run()
}
