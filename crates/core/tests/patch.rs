mod common;

use common::Fixture;
use modpath_api::ModuleDescriptor;
use modpath_core::{LaunchOptions, ModpathError, ModulePatchPlanner, PatchPlan, PatchStrategy};

fn plan(fixture: &Fixture, options: &LaunchOptions, module: &ModuleDescriptor) -> PatchPlan {
    let artifacts = fixture.model.artifact_map();
    ModulePatchPlanner::new(&fixture.model.build, &artifacts, options)
        .plan(Some(module))
        .unwrap()
}

fn test_output(fixture: &Fixture) -> String {
    format!("app={}", fixture.model.build.test_output_directory.display())
}

#[test]
fn test_best_effort_reads_from_declared_artifacts() {
    let mut fixture = Fixture::new();
    fixture.declare("org.junit.jupiter:junit-jupiter-api:5.3.1");
    fixture.declare("org.junit.jupiter:junit-jupiter-params:5.3.1");
    let module = ModuleDescriptor::new("app", ["app"]);

    let plan = plan(&fixture, &LaunchOptions::default(), &module);

    assert_eq!(
        plan.arguments(),
        vec![
            "--patch-module".to_string(),
            test_output(&fixture),
            "--add-reads".to_string(),
            "app=org.junit.jupiter.api".to_string(),
            "--add-reads".to_string(),
            "app=org.junit.jupiter.params".to_string(),
        ]
    );
    assert!(!plan.arguments().iter().any(|a| a == "--add-opens"));
}

#[test]
fn test_best_effort_probe_order() {
    let mut fixture = Fixture::new();
    fixture.declare("junit:junit:4.12");
    fixture.declare("org.junit.jupiter:junit-jupiter-migrationsupport:5.3.1");
    fixture.declare("org.junit.jupiter:junit-jupiter-api:5.3.1");
    let module = ModuleDescriptor::new("app", ["app"]);

    let plan = plan(&fixture, &LaunchOptions::default(), &module);

    assert_eq!(
        plan.strategy,
        PatchStrategy::BestEffort {
            reads: vec![
                "org.junit.jupiter.api".to_string(),
                "org.junit.jupiter.migrationsupport".to_string(),
                "junit".to_string(),
            ],
            opens: vec![],
        }
    );
}

#[test]
fn test_opens_fan_out_one_pair_per_package() {
    let mut fixture = Fixture::new();
    fixture.declare("org.junit.platform:junit-platform-commons:1.3.1");
    let module = ModuleDescriptor::new("app", ["p1", "p2", "p3"]);

    let args = plan(&fixture, &LaunchOptions::default(), &module).arguments();

    let opens: Vec<&str> = args
        .windows(2)
        .filter(|pair| pair[0] == "--add-opens")
        .map(|pair| pair[1].as_str())
        .collect();
    assert_eq!(
        opens,
        vec![
            "app/p1=org.junit.platform.commons",
            "app/p2=org.junit.platform.commons",
            "app/p3=org.junit.platform.commons",
        ]
    );
}

#[test]
fn test_explicit_lists_replace_probing() {
    let mut fixture = Fixture::new();
    fixture.declare("org.junit.jupiter:junit-jupiter-api:5.3.1");
    fixture.declare("org.junit.platform:junit-platform-commons:1.3.1");
    let options = LaunchOptions {
        add_reads: Some(vec!["org.assertj.core".to_string()]),
        add_opens: Some(vec![]),
        ..LaunchOptions::default()
    };
    let module = ModuleDescriptor::new("app", ["app"]);

    let plan = plan(&fixture, &options, &module);

    assert_eq!(
        plan.strategy,
        PatchStrategy::BestEffort {
            reads: vec!["org.assertj.core".to_string()],
            opens: vec![],
        }
    );
}

#[test]
fn test_override_file_replaces_best_effort() {
    let mut fixture = Fixture::new();
    fixture.declare("org.junit.jupiter:junit-jupiter-api:5.3.1");
    fixture.declare("org.junit.platform:junit-platform-commons:1.3.1");
    fixture.write_override(
        &fixture.model.build.test_source_directory,
        "--add-reads app=junit\n// note\n\n",
    );
    let module = ModuleDescriptor::new("app", ["app"]);

    let args = plan(&fixture, &LaunchOptions::default(), &module).arguments();

    assert_eq!(
        args,
        vec![
            "--patch-module".to_string(),
            test_output(&fixture),
            "--add-reads".to_string(),
            "app=junit".to_string(),
        ]
    );
}

#[test]
fn test_override_file_one_token_per_line() {
    let fixture = Fixture::new();
    fixture.write_override(
        &fixture.model.build.test_output_directory,
        "--add-reads\n  app=junit  \n// note\n\n",
    );
    let module = ModuleDescriptor::new("app", ["app"]);

    let args = plan(&fixture, &LaunchOptions::default(), &module).arguments();

    assert_eq!(
        args,
        vec![
            "--patch-module".to_string(),
            test_output(&fixture),
            "--add-reads".to_string(),
            "app=junit".to_string(),
        ]
    );
}

#[test]
fn test_test_source_root_is_searched_first() {
    let fixture = Fixture::new();
    let source = fixture.write_override(&fixture.model.build.test_source_directory, "--from-source");
    fixture.write_override(&fixture.model.build.test_output_directory, "--from-output");
    let artifacts = fixture.model.artifact_map();
    let options = LaunchOptions::default();

    let strategy = ModulePatchPlanner::new(&fixture.model.build, &artifacts, &options)
        .select_strategy()
        .unwrap();

    assert_eq!(
        strategy,
        PatchStrategy::Override {
            source,
            directives: vec!["--from-source".to_string()],
        }
    );
}

#[test]
fn test_custom_override_file_name() {
    let fixture = Fixture::new();
    std::fs::write(
        fixture.model.build.test_source_directory.join("patch.args"),
        "--add-opens app/app=ALL-UNNAMED",
    )
    .unwrap();
    fixture.write_override(&fixture.model.build.test_source_directory, "--ignored");
    let options = LaunchOptions {
        module_info_test: "patch.args".to_string(),
        ..LaunchOptions::default()
    };
    let module = ModuleDescriptor::new("app", ["app"]);

    let args = plan(&fixture, &options, &module).arguments();

    assert_eq!(
        args[2..],
        ["--add-opens".to_string(), "app/app=ALL-UNNAMED".to_string()]
    );
}

#[test]
fn test_unreadable_override_file_is_fatal() {
    let mut fixture = Fixture::new();
    fixture.declare("org.junit.jupiter:junit-jupiter-api:5.3.1");
    let path = fixture.model.build.test_source_directory.join("module-info.test");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let artifacts = fixture.model.artifact_map();
    let options = LaunchOptions::default();
    let module = ModuleDescriptor::new("app", ["app"]);

    let err = ModulePatchPlanner::new(&fixture.model.build, &artifacts, &options)
        .plan(Some(&module))
        .unwrap_err();

    match err {
        ModpathError::OverrideRead { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("Expected OverrideRead, got {other:?}"),
    }
}

#[test]
fn test_missing_main_module_is_fatal() {
    let fixture = Fixture::new();
    let artifacts = fixture.model.artifact_map();
    let options = LaunchOptions::default();

    let err = ModulePatchPlanner::new(&fixture.model.build, &artifacts, &options)
        .plan(None)
        .unwrap_err();

    assert!(matches!(err, ModpathError::MissingMainModule));
}
