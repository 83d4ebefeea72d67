fn main() -> anyhow::Result<()> {
    docshift::cli::run_cli()
}
