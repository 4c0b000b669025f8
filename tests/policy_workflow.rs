use chrono::NaiveDate;
use policy_explorer::backend::{LocalBackend, PolicyBackend};
use policy_explorer::data::{Country, DocumentLoader, Metadata};
use policy_explorer::gui::{ParameterEdit, ParameterEditor};
use policy_explorer::household::{ChildRules, Household};
use policy_explorer::menu::MenuState;
use policy_explorer::policy::{ParameterValue, Reform};
use policy_explorer::query::{SearchParams, FOCUS, HOUSEHOLD, REFORM};
use serde_json::Value;
use std::io::Write;

const METADATA: &str = r#"{
    "countryId": "uk",
    "parameters": {
        "gov.hmrc.income_tax.basic_rate": {
            "parameter": "gov.hmrc.income_tax.basic_rate",
            "label": "Basic rate",
            "description": "Income tax basic rate",
            "unit": "/1",
            "values": {"2015-04-06": 0.2}
        },
        "gov.dwp.child_benefit.abolish": {
            "parameter": "gov.dwp.child_benefit.abolish",
            "label": "Abolish Child Benefit",
            "unit": "abolition",
            "values": {"2010-01-01": false}
        }
    },
    "variables": {
        "household_net_income": {"name": "household_net_income", "entity": "household", "definitionPeriod": "year"},
        "benunit_rent": {"name": "benunit_rent", "entity": "benunit", "definitionPeriod": "month"}
    },
    "entities": {
        "person": {"key": "person", "plural": "people", "isPerson": true},
        "benunit": {"key": "benunit", "plural": "benunits"},
        "household": {"key": "household", "plural": "households"}
    },
    "parameterTree": [
        {"name": "gov", "children": [
            {"name": "gov.hmrc", "index": 0, "children": [
                {"name": "gov.hmrc.income_tax.basic_rate", "label": "Basic rate", "index": 0}
            ]},
            {"name": "gov.dwp", "index": 1, "children": [
                {"name": "gov.dwp.child_benefit.abolish", "index": 0}
            ]}
        ]}
    ]
}"#;

fn metadata() -> Metadata {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(METADATA.as_bytes()).unwrap();
    DocumentLoader::read_metadata(file.path()).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn selecting_editing_and_saving_a_reform() {
    let meta = metadata();
    let backend = LocalBackend::new();
    let mut search = SearchParams::new();

    // Open the menu by hand and pick a leaf.
    let tree = meta.menu_tree();
    let mut menu = MenuState::new();
    let top = menu.layout(&tree, "");
    assert_eq!(top.len(), 1);
    assert!(menu.toggle("gov"));
    menu.layout(&tree, "");
    assert!(menu.toggle("gov.hmrc"));
    let rows = menu.layout(&tree, "");
    let basic_rate = rows
        .iter()
        .find(|r| r.label == "Basic rate")
        .map(|r| r.name.clone())
        .unwrap();
    search = search.with(FOCUS, basic_rate.clone());

    // Edit it for the default range and save.
    let parameter = meta.parameter(search.get(FOCUS).unwrap()).unwrap();
    let mut editor = ParameterEditor::new(date("2022-01-01"), date("2027-12-31"));
    editor.value_input = "0.22".into();
    let edit = editor.numeric_edit(parameter).unwrap();
    let reform = edit.apply(&Reform::default());
    let id = backend.new_policy_id(meta.country_id, &reform).unwrap();
    search = search.with(REFORM, id.as_str());

    assert_eq!(search.get(REFORM), Some("1"));
    assert_eq!(search.get(FOCUS), Some("gov.hmrc.income_tax.basic_rate"));

    let reformed = parameter.reformed(&reform);
    assert_eq!(reformed.value_at(date("2024-01-01")), Some(ParameterValue::Number(0.22)));
    assert_eq!(reformed.value_at(date("2028-01-01")), Some(ParameterValue::Number(0.2)));

    // The menu follows the new selection.
    let rows = menu.layout(&tree, search.get(FOCUS).unwrap());
    assert!(rows.iter().any(|r| r.name == basic_rate));
    assert_eq!(menu.is_expanded("gov.dwp"), Some(false));
}

#[test]
fn abolition_switch_merges_into_existing_reform() {
    let meta = metadata();
    let backend = LocalBackend::new();
    let editor = ParameterEditor::new(date("2022-01-01"), date("2027-12-31"));

    let first = ParameterEdit {
        parameter: "gov.hmrc.income_tax.basic_rate".into(),
        period: editor.period().unwrap(),
        value: ParameterValue::Number(0.25),
    }
    .apply(&Reform::default());

    let abolish = meta.parameter("gov.dwp.child_benefit.abolish").unwrap();
    assert!(abolish.is_boolean());
    let reform = editor.switch_edit(abolish, true).unwrap().apply(&first);

    assert_eq!(reform.parameter_names().count(), 2);
    let a = backend.new_policy_id(Country::Uk, &first).unwrap();
    let b = backend.new_policy_id(Country::Uk, &reform).unwrap();
    assert_ne!(a, b);
    assert_eq!(backend.new_policy_id(Country::Uk, &reform).unwrap(), b);
}

#[test]
fn household_children_round_trip_through_backend() {
    let meta = metadata();
    let backend = LocalBackend::new();
    let rules = ChildRules::for_country(meta.country_id);
    let start = Household::starting(meta.country_id, "2022");

    let two = rules
        .set_count_children(start, 2, &meta.variables, &meta.entities, "2022")
        .unwrap();
    assert_eq!(rules.count_children(&two, "2022"), 2);
    assert_eq!(
        two.groups["households"]["your household"].variables["household_net_income"]["2022"],
        Value::Null
    );
    assert!(!two.groups["benunits"]["your immediate family"]
        .variables
        .contains_key("benunit_rent"));

    let id = backend.new_household_id(meta.country_id, &two).unwrap();
    let search = SearchParams::new().with(HOUSEHOLD, id.as_str());
    assert_eq!(search.to_query_string(), "household=1");

    let none = rules
        .set_count_children(two.clone(), 0, &meta.variables, &meta.entities, "2022")
        .unwrap();
    assert_eq!(none.people.len(), 1);
    assert_ne!(backend.new_household_id(meta.country_id, &none).unwrap(), id);
    assert_eq!(backend.new_household_id(meta.country_id, &two).unwrap(), id);
}
