mod common;

use common::TestEnv;

#[test]
fn help_lists_commands() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("deploy"));
    assert!(result.stdout.contains("doctor"));
    assert!(result.stdout.contains("config"));
}

#[test]
fn unknown_subcommand_fails() {
    let env = TestEnv::new();
    let result = env.run(&["frobnicate"]);

    assert!(!result.success);
}
