fn main() -> anyhow::Result<()> {
    multimatch_lib::run()
}
