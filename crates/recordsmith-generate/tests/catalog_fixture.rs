use std::path::PathBuf;

use recordsmith_core::{FieldValue, InMemoryCatalog, StaticIdentity};
use recordsmith_generate::{
    FieldOverrides, GenerationContext, GenerationPolicy, JsonLinesSink, RecordGenerator,
    load_config,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn generates_contact_graph_from_catalog_file() {
    let catalog = InMemoryCatalog::from_json_path(&fixture("crm.catalog.json")).expect("load catalog");
    let config = load_config(&fixture("recordsmith.toml")).expect("load config");
    assert_eq!(config.email_domain, "fixtures.test");

    let identity = StaticIdentity::new("005000000000001AAA", "00e000000000001AAA");
    let mut sink = JsonLinesSink::new(Vec::new());
    let mut generator =
        RecordGenerator::new(GenerationContext::new(&catalog, &identity, &mut sink), config);

    let contact_id = generator
        .create_and_persist(
            "contact",
            &FieldOverrides::default(),
            GenerationPolicy::new(false, true),
        )
        .expect("generate contact")
        .expect("contact is known");
    drop(generator);

    assert_eq!(sink.written(), 2);
    let bytes = sink.into_inner().expect("flush sink");
    let text = String::from_utf8(bytes).expect("utf8 output");
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("parse json line"))
        .collect();

    let account = &lines[0];
    assert_eq!(account["type"], "Account");
    let account_fields = account["fields"].as_object().expect("account fields");
    let mut names: Vec<&str> = account_fields.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Industry", "Name", "OwnerId"]);
    assert_eq!(account["fields"]["OwnerId"], "005000000000001AAA");
    assert_eq!(account["fields"]["Name"].as_str().map(str::len), Some(40));

    let contact = &lines[1];
    assert_eq!(contact["id"], contact_id.as_str());
    assert_eq!(contact["type"], "Contact");
    assert_eq!(contact["fields"]["AccountId"], account["id"]);
    assert_eq!(contact["fields"]["ReportsToId"], serde_json::Value::Null);
    assert_eq!(contact["fields"]["Location"], serde_json::Value::Null);
    let email = contact["fields"]["Email"].as_str().expect("email");
    assert!(email.ends_with("@fixtures.test"));
}

#[test]
fn full_account_fills_optional_fields() {
    let catalog = InMemoryCatalog::from_json_path(&fixture("crm.catalog.json")).expect("load catalog");
    let config = load_config(&fixture("recordsmith.toml")).expect("load config");
    let identity = StaticIdentity::new("005000000000001AAA", "00e000000000001AAA");
    let mut sink = JsonLinesSink::new(Vec::new());
    let mut generator =
        RecordGenerator::new(GenerationContext::new(&catalog, &identity, &mut sink), config);

    let account = generator
        .create_full("Account", false, true)
        .expect("generate account")
        .expect("account is known");
    drop(generator);

    assert_eq!(
        account.field_names().collect::<Vec<_>>(),
        vec![
            "Name",
            "Industry",
            "AnnualRevenue",
            "Website",
            "Phone",
            "OwnerId",
            "ParentId",
            "RecordTypeId",
        ]
    );
    assert_eq!(
        account.get("Website"),
        Some(&FieldValue::Text("https://www.fixtures.test".to_string()))
    );
    assert_eq!(account.get("ParentId"), Some(&FieldValue::Null));
    assert_eq!(
        account.get("RecordTypeId"),
        Some(&FieldValue::Id("012000000000001AAA".to_string()))
    );
    let revenue = account.get("AnnualRevenue").and_then(FieldValue::as_f64).expect("revenue");
    assert!(revenue >= 0.0 && revenue < 1e16);
    assert_eq!(sink.written(), 0);
}
