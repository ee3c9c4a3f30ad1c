fn main() -> anyhow::Result<()> {
    bento_app::platform::run_app()
}
