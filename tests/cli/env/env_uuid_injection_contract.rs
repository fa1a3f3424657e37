use crate::harness::{SAMPLE_ENV, TestContext};

#[test]
fn env_appends_uuid_line_when_set() {
    let ctx = TestContext::new();
    ctx.write_sample_config();

    ctx.cli().arg("env").env("TAKU_ENV_UUID", "abc-123").assert().success();

    assert_eq!(
        ctx.read_file("taku.config.env"),
        format!("{}TAKU_ENV_UUID=\"abc-123\"\n", SAMPLE_ENV)
    );
}

#[test]
fn env_omits_uuid_line_when_empty() {
    let ctx = TestContext::new();
    ctx.write_sample_config();

    ctx.cli().arg("env").env("TAKU_ENV_UUID", "").assert().success();

    assert_eq!(ctx.read_file("taku.config.env"), SAMPLE_ENV);
}
