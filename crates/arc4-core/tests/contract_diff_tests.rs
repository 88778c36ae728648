use arc4_core::diff::{Change, Diff, Entry, MethodsDelta};
use arc4_core::{Contract, Dictify, Format, Method};
use serde_json::{json, Value};

fn contract(doc: Value) -> Contract {
    Contract::undictify(&doc).unwrap()
}

fn calculator() -> Value {
    json!({
        "name": "calculator",
        "methods": [
            {"name": "sub", "args": [{"type": "uint64"}, {"type": "uint64"}], "returns": {"type": "uint64"}},
            {"name": "add", "args": [{"type": "uint64"}, {"type": "uint64"}], "returns": {"type": "uint128"}},
            {"name": "mul", "args": [{"type": "uint64"}, {"type": "uint64"}], "returns": {"type": "uint128"}}
        ],
        "networks": {"mainnet": {"appID": 10}, "testnet": {"appID": 20}}
    })
}

#[test]
fn test_identical_contracts_have_no_diff() {
    let c = contract(calculator());
    assert!(c.diff(&c.clone()).is_none());
}

#[test]
fn test_methods_pair_by_name() {
    let left = contract(calculator());
    let right = contract(json!({
        "name": "calculator",
        "methods": [
            {"name": "add", "args": [{"type": "uint64"}, {"type": "uint64"}], "returns": {"type": "uint128"}},
            {"name": "sub", "args": [{"type": "uint64"}, {"type": "uint32"}], "returns": {"type": "uint64"}},
            {"name": "div", "args": [{"type": "uint64"}, {"type": "uint64"}], "returns": {"type": "uint64"}}
        ],
        "networks": {"mainnet": {"appID": 10}, "testnet": {"appID": 20}}
    }));

    let diff = left.diff(&right).unwrap();
    assert!(diff.name.is_none());
    assert!(diff.networks.is_none());

    let Some(MethodsDelta::ByName(slots)) = &diff.methods else {
        panic!("expected name-paired methods, got {:?}", diff.methods);
    };
    assert_eq!(slots.len(), 4);
    // shared names in name order: add (unchanged), sub (changed)
    assert!(slots[0].is_none());
    match &slots[1] {
        Some(Entry::Modified(m)) => assert_eq!(m.name, "sub"),
        other => panic!("expected modified sub, got {:?}", other),
    }
    assert!(matches!(&slots[2], Some(Entry::Removed(v)) if v["name"] == "mul"));
    assert!(matches!(&slots[3], Some(Entry::Added(v)) if v["name"] == "div"));

    let value = serde_json::to_value(&diff).unwrap();
    assert_eq!(
        value["methods"][1],
        json!({
            "name": "sub",
            "desc": null,
            "args": [null, {"type": ["uint64", "uint32"], "name": null, "desc": null}],
            "returns": null,
            "txn_calls": null
        })
    );
    assert_eq!(value["methods"][2][1], Value::Null);
    assert_eq!(value["methods"][3][0], Value::Null);
}

#[test]
fn test_overloaded_contract_reports_method_lists_whole() {
    let left = contract(json!({
        "name": "c",
        "methods": [
            {"name": "f", "args": [{"type": "uint64"}], "returns": {"type": "void"}},
            {"name": "f", "args": [{"type": "string"}], "returns": {"type": "void"}}
        ]
    }));
    let right = contract(json!({
        "name": "c",
        "methods": [
            {"name": "f", "args": [{"type": "uint64"}], "returns": {"type": "void"}}
        ]
    }));

    let diff = left.diff(&right).unwrap();
    match diff.methods {
        Some(MethodsDelta::Replaced(Change(old, new))) => {
            assert_eq!(old.len(), 2);
            assert_eq!(new.len(), 1);
            assert_eq!(old[1], left.methods()[1].dictify(Format::Standard));
        }
        other => panic!("expected wholesale replacement, got {:?}", other),
    }
}

#[test]
fn test_network_changes_are_keyed() {
    let left = contract(calculator());
    let mut doc = calculator();
    doc["networks"] = json!({"mainnet": {"appID": 11}, "betanet": {"appID": 30}});
    let right = contract(doc);

    let diff = left.diff(&right).unwrap();
    assert!(diff.methods.is_none());
    assert_eq!(
        serde_json::to_value(&diff.networks).unwrap(),
        json!({
            "betanet": [null, {"appID": 30}],
            "mainnet": {"appID": [10, 11]},
            "testnet": [{"appID": 20}, null]
        })
    );
}

#[test]
fn test_report_field_order_follows_declaration() {
    let left = contract(calculator());
    let mut doc = calculator();
    doc["name"] = json!("calc");
    doc["desc"] = json!("renamed");
    let right = contract(doc);

    let value = serde_json::to_value(left.diff(&right).unwrap()).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["name", "desc", "methods", "networks"]);
    assert_eq!(value["name"], json!(["calculator", "calc"]));
    assert_eq!(value["desc"], json!([null, "renamed"]));
}

#[test]
fn test_method_rename_is_a_removal_and_an_addition() {
    let left = Contract::new(
        "c",
        vec![Method::from_signature("f(uint64)void").unwrap()],
        None,
        Default::default(),
    );
    let right = Contract::new(
        "c",
        vec![Method::from_signature("g(uint64)void").unwrap()],
        None,
        Default::default(),
    );
    let value = serde_json::to_value(left.diff(&right).unwrap().methods).unwrap();
    assert_eq!(
        value,
        json!([
            [{"name": "f", "args": [{"type": "uint64"}], "returns": {"type": "void"}}, null],
            [null, {"name": "g", "args": [{"type": "uint64"}], "returns": {"type": "void"}}]
        ])
    );
}
