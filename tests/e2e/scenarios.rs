use super::helpers::TestProject;

const MIXED_MANIFEST: &str = r#"[
    {"name": "dompurify", "license": "MPL-2.0", "licenseText": "dompurify license text"},
    {"name": "left-pad", "license": "WTFPL", "licenseText": "left-pad license text"},
    {"name": "evil-pkg", "license": "GPL-3.0", "licenseText": "gpl text"}
]"#;

#[test]
fn test_check_writes_attribution_and_reports_violations() {
    let test_env = TestProject::new();
    test_env.write_manifest(MIXED_MANIFEST).unwrap();

    let output = test_env.run_auditor(&["check"]);

    // A forbidden license fails the build
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("License violations found"));

    // The attribution file contains exactly the two accepted blocks, in
    // manifest order, with the dompurify override applied
    let attribution = test_env.read_attribution().unwrap();
    let blocks: Vec<&str> = attribution.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], "dompurify - Apache-2.0\ndompurify license text");
    assert_eq!(blocks[1], "left-pad - WTFPL\nleft-pad license text");
    assert!(!attribution.contains("evil-pkg"));
}

#[test]
fn test_check_exit_zero_flag() {
    let test_env = TestProject::new();
    test_env.write_manifest(MIXED_MANIFEST).unwrap();

    let output = test_env.run_auditor(&["check", "--exit-zero"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("evil-pkg"));
}

#[test]
fn test_check_clean_manifest_succeeds() {
    let test_env = TestProject::new();
    test_env
        .write_manifest(
            r#"[
                {"name": "left-pad", "license": "WTFPL", "licenseText": "text"},
                {"name": "isarray", "license": "MIT"}
            ]"#,
        )
        .unwrap();

    let output = test_env.run_auditor(&["check"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No license violations found"));

    // isarray has no bundled text; the built-in pointer fills in
    let attribution = test_env.read_attribution().unwrap();
    assert!(attribution.contains(
        "isarray - MIT\nSee the license at: https://github.com/juliangruber/isarray/blob/master/LICENSE"
    ));
}

#[test]
fn test_strict_mode_aborts_on_forbidden_license() {
    let test_env = TestProject::new();
    test_env.write_manifest(MIXED_MANIFEST).unwrap();

    let output = test_env.run_auditor(&["check", "--strict"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Forbidden license 'GPL-3.0' found for package 'evil-pkg'"));
}

#[test]
fn test_strict_mode_aborts_on_missing_license() {
    let test_env = TestProject::new();
    test_env
        .write_manifest(r#"[{"name": "mystery-pkg"}]"#)
        .unwrap();

    let output = test_env.run_auditor(&["check", "--strict"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing license for 'mystery-pkg'"));
}

#[test]
fn test_soft_mode_records_missing_license() {
    let test_env = TestProject::new();
    test_env
        .write_manifest(r#"[{"name": "mystery-pkg"}, {"name": "left-pad", "license": "WTFPL"}]"#)
        .unwrap();

    let output = test_env.run_auditor(&["check", "--exit-zero", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"missing\": 1"));
    assert!(stdout.contains("mystery-pkg"));

    // The attribution file is still written for the accepted dependency
    let attribution = test_env.read_attribution().unwrap();
    assert!(attribution.contains("left-pad - WTFPL"));
}

#[test]
fn test_config_exclusions_exempt_commercial_packages() {
    let test_env = TestProject::new();
    test_env
        .write_config("additional_excluded_packages = [\"corp-widgets\"]\n")
        .unwrap();
    test_env
        .write_manifest(
            r#"[
                {"name": "corp-widgets", "license": "Proprietary", "licenseText": "commercial terms"},
                {"name": "devextreme", "license": "Proprietary", "licenseText": "commercial terms"}
            ]"#,
        )
        .unwrap();

    let output = test_env.run_auditor(&["check"]);
    assert!(output.status.success());

    let attribution = test_env.read_attribution().unwrap();
    assert!(attribution.contains("corp-widgets - Proprietary"));
    assert!(attribution.contains("devextreme - Proprietary"));
}

#[test]
fn test_config_fail_on_violation_enables_strict() {
    let test_env = TestProject::new();
    test_env.write_config("fail_on_violation = true\n").unwrap();
    test_env.write_manifest(MIXED_MANIFEST).unwrap();

    let output = test_env.run_auditor(&["check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Forbidden license 'GPL-3.0'"));
}

#[test]
fn test_init_and_config_validate() {
    let test_env = TestProject::new();

    let init_output = test_env.run_auditor(&["init"]);
    assert!(init_output.status.success());
    assert!(test_env.dir.path().join("license-audit.toml").exists());

    let validate_output = test_env.run_auditor(&["config", "--validate"]);
    assert!(validate_output.status.success());

    let show_output = test_env.run_auditor(&["config", "--show"]);
    assert!(show_output.status.success());
    assert!(String::from_utf8_lossy(&show_output.stdout).contains("additional_excluded_packages"));

    // Re-running init must not clobber the existing config
    let second_init = test_env.run_auditor(&["init"]);
    assert!(!second_init.status.success());
}

#[test]
fn test_fix_adds_violating_packages_to_exclusions() {
    let test_env = TestProject::new();
    test_env.write_manifest(MIXED_MANIFEST).unwrap();

    let init_output = test_env.run_auditor(&["init"]);
    assert!(init_output.status.success());

    // Dry-run shows the change without applying it
    let dry_run_output = test_env.run_auditor(&["fix", "--dry-run"]);
    assert!(dry_run_output.status.success());
    let stdout = String::from_utf8_lossy(&dry_run_output.stdout);
    assert!(stdout.contains("Would add 1 packages"));
    assert!(stdout.contains("evil-pkg"));

    let check_before = test_env.run_auditor(&["check"]);
    assert!(!check_before.status.success());

    // Apply the fix, then the audit passes
    let fix_output = test_env.run_auditor(&["fix"]);
    assert!(fix_output.status.success());
    assert!(String::from_utf8_lossy(&fix_output.stdout).contains("evil-pkg"));

    let check_after = test_env.run_auditor(&["check"]);
    assert!(check_after.status.success());

    let attribution = test_env.read_attribution().unwrap();
    assert!(attribution.contains("evil-pkg - GPL-3.0"));
}

#[test]
fn test_fix_with_clean_manifest_is_a_noop() {
    let test_env = TestProject::new();
    test_env
        .write_manifest(r#"[{"name": "left-pad", "license": "WTFPL"}]"#)
        .unwrap();

    let output = test_env.run_auditor(&["fix"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("nothing to fix"));
}

#[test]
fn test_check_with_explicit_manifest_path() {
    let test_env = TestProject::new();
    std::fs::write(
        test_env.dir.path().join("bundle-deps.json"),
        r#"{"dependencies": [{"name": "left-pad", "license": "WTFPL"}]}"#,
    )
    .unwrap();

    let output = test_env.run_auditor(&["check", "bundle-deps.json"]);
    assert!(output.status.success());
}

#[test]
fn test_check_without_manifest_fails_with_hint() {
    let test_env = TestProject::new();

    let output = test_env.run_auditor(&["check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("dependencies.json"));
}
