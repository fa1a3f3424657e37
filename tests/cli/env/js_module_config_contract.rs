use crate::harness::{SAMPLE_ENV, TestContext, node_available};

#[test]
fn env_evaluates_commonjs_config() {
    if !node_available() {
        return;
    }
    let ctx = TestContext::new();
    ctx.write_file(
        "taku.config.js",
        r#"const pm = "npm";
module.exports = {
  frontend: { type: "vite", buildCommand: `${pm} run build` },
  backend: { type: "node", buildCommand: "node server.js" },
};
"#,
    );

    ctx.cli().arg("env").assert().success();

    assert_eq!(ctx.read_file("taku.config.env"), SAMPLE_ENV);
}

#[test]
fn env_prefers_default_export_of_es_module() {
    if !node_available() {
        return;
    }
    let ctx = TestContext::new();
    ctx.write_file(
        "taku.config.mjs",
        r#"export const unused = { frontend: { type: "wrong" } };
export default {
  frontend: { type: "vite", buildCommand: "npm run build" },
  backend: { type: "node", buildCommand: "node server.js" },
};
"#,
    );

    ctx.cli().arg("env").assert().success();

    assert_eq!(ctx.read_file("taku.config.env"), SAMPLE_ENV);
}

#[test]
fn env_reflects_edits_to_js_config() {
    if !node_available() {
        return;
    }
    let ctx = TestContext::new();
    ctx.write_file("taku.config.cjs", "module.exports = { backend: { type: 'node' } };\n");
    ctx.cli().arg("env").assert().success();

    ctx.write_file("taku.config.cjs", "module.exports = { backend: { type: 'bun' } };\n");
    ctx.cli().arg("env").assert().success();

    assert!(ctx.read_file("taku.config.env").contains("BACKEND_TYPE=\"bun\"\n"));
}

#[test]
fn env_ignores_extra_fields_that_cannot_be_serialized() {
    if !node_available() {
        return;
    }
    let ctx = TestContext::new();
    ctx.write_file(
        "taku.config.js",
        r#"const config = {
  frontend: { type: "vite", buildCommand: "npm run build" },
  backend: { type: "node", buildCommand: "node server.js" },
  limits: { maxBytes: 10n },
};
config.self = config;
module.exports = config;
"#,
    );

    ctx.cli().arg("env").assert().success();

    assert_eq!(ctx.read_file("taku.config.env"), SAMPLE_ENV);
}

#[test]
fn env_is_unaffected_by_config_console_output() {
    if !node_available() {
        return;
    }
    let ctx = TestContext::new();
    ctx.write_file(
        "taku.config.js",
        r#"console.log("__TAKU_REPORT__{\"status\":\"error\",\"message\":\"spoofed\"}");
setTimeout(() => console.log("late output"), 0);
module.exports = {
  frontend: { type: "vite", buildCommand: "echo __TAKU_REPORT__" },
};
"#,
    );

    ctx.cli().arg("env").assert().success();

    assert_eq!(
        ctx.read_file("taku.config.env"),
        "FRONTEND_TYPE=\"vite\"\n\
         FRONTEND_BUILD_CMD=\"echo __TAKU_REPORT__\"\n\
         BACKEND_TYPE=\"\"\n\
         BACKEND_BUILD_CMD=\"\"\n"
    );
}

#[test]
fn env_stringifies_non_string_js_values() {
    if !node_available() {
        return;
    }
    let ctx = TestContext::new();
    ctx.write_file(
        "taku.config.js",
        r#"module.exports = {
  frontend: { type: ["vite", "react"], buildCommand: { run: "build" } },
  backend: { type: false, buildCommand: 3000 },
};
"#,
    );

    ctx.cli().arg("env").assert().success();

    assert_eq!(
        ctx.read_file("taku.config.env"),
        "FRONTEND_TYPE=\"vite,react\"\n\
         FRONTEND_BUILD_CMD=\"[object Object]\"\n\
         BACKEND_TYPE=\"\"\n\
         BACKEND_BUILD_CMD=\"3000\"\n"
    );
}

#[test]
fn env_runs_explicit_config_from_the_invoking_directory() {
    if !node_available() {
        return;
    }
    let ctx = TestContext::new();
    ctx.write_file(
        "config/taku.cjs",
        r#"const path = require("path");
module.exports = { frontend: { type: path.basename(process.cwd()) } };
"#,
    );

    ctx.cli().args(["env", "--config", "config/taku.cjs"]).assert().success();

    assert!(ctx.read_file("taku.config.env").starts_with("FRONTEND_TYPE=\"work\"\n"));
}
