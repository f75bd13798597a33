//! Shared fixtures for integration tests.

use deplint::semantic::Diagnostic;
use deplint::syntax::Program;
use deplint::syntax::builder::*;

/// The passing example from the rule docs: a web application referencing the
/// plan through an ordinary property read, with no dependsOn list.
pub fn plan_and_web_without_depends_on() -> Program {
    Program::new(vec![
        resource("appServicePlan", "Microsoft.Web/serverfarms@2020-12-01")
            .body_prop("name", string("name"))
            .body_prop("location", call("resourceGroup", vec![]))
            .body_prop(
                "sku",
                obj(vec![("name", string("F1")), ("capacity", int(1))]),
            )
            .build(),
        resource("webApplication", "Microsoft.Web/sites@2018-11-01")
            .body_prop("name", string("name"))
            .body_prop(
                "properties",
                obj(vec![("serverFarmId", prop(ident("appServicePlan"), "id"))]),
            )
            .build(),
    ])
}

/// The failing example from the rule docs: same data flow plus a dependsOn
/// entry naming the plan.
pub fn plan_and_web_with_redundant_depends_on() -> Program {
    Program::new(vec![
        resource("appServicePlan", "Microsoft.Web/serverfarms@2020-12-01")
            .body_prop("name", string("name"))
            .build(),
        resource("webApplication", "Microsoft.Web/sites@2018-11-01")
            .body_prop("name", string("name"))
            .body_prop(
                "properties",
                obj(vec![("serverFarmId", prop(ident("appServicePlan"), "id"))]),
            )
            .depends_on(vec![ident("appServicePlan")])
            .build(),
    ])
}

/// A loop-produced storage collection plus a deployment script reading one
/// member by index.
pub fn storage_loop_and_script(script_depends_on: Vec<deplint::syntax::Expr>) -> Program {
    Program::new(vec![
        resource("storageAccountResources", "Microsoft.Storage/storageAccounts@2019-06-01")
            .loop_over("storageName", ident("storageAccounts"))
            .body_prop("name", ident("storageName"))
            .body_prop("kind", string("StorageV2"))
            .build(),
        resource("dScript", "Microsoft.Resources/deploymentScripts@2019-10-01-preview")
            .body_prop("name", string("scriptWithStorage"))
            .body_prop(
                "properties",
                obj(vec![(
                    "storageAccountSettings",
                    obj(vec![(
                        "storageAccountName",
                        prop(index(ident("storageAccountResources"), int(0)), "name"),
                    )]),
                )]),
            )
            .depends_on(script_depends_on)
            .build(),
    ])
}

/// Collect diagnostic messages as plain strings.
pub fn messages(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(|d| d.message.to_string()).collect()
}
