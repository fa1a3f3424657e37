use crate::harness::TestContext;

#[test]
fn env_repeated_runs_produce_identical_bytes() {
    let ctx = TestContext::new();
    ctx.write_sample_config();

    ctx.cli().arg("env").assert().success();
    let first = std::fs::read(ctx.work_dir().join("taku.config.env")).unwrap();

    ctx.cli().arg("env").assert().success();
    let second = std::fs::read(ctx.work_dir().join("taku.config.env")).unwrap();

    assert_eq!(first, second);
}
