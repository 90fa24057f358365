//! End-to-end mapping behaviour through the public surface.

use chrono::NaiveDate;
use rowcast::{
    BindError, BindingRegistry, CellValue, RowTable, ValueKind, impl_record, map_dynamic,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Person {
    name: String,
    age: i64,
}
impl_record!(Person { name: String, age: i64 });

#[derive(Debug, Default, PartialEq)]
struct Employee {
    name: String,
    age: i64,
    note: String,
}
impl_record!(Employee {
    name: String,
    age: i64,
    note: String,
});

#[derive(Debug, Default, PartialEq)]
struct Reading {
    label: String,
    value: f64,
    taken: NaiveDate,
    active: bool,
    id: i64,
}
impl_record!(Reading {
    label: String,
    value: f64,
    taken: NaiveDate,
    active: bool,
} readonly { id: i64 });

fn people_source() -> RowTable {
    RowTable::with_rows(
        ["name", "age"],
        vec![
            vec!["Ann".into(), 30i64.into()],
            vec!["Ben".into(), 41i64.into()],
        ],
    )
    .unwrap()
}

fn registry() -> BindingRegistry {
    let mut registry = BindingRegistry::new();
    registry.register::<Person>().unwrap();
    registry.register::<Employee>().unwrap();
    registry.register::<Reading>().unwrap();
    registry
}

#[test]
fn cached_maps_all_fields_in_row_order() {
    let people: Vec<Person> = registry().map_cached(&people_source()).unwrap();
    assert_eq!(
        people,
        vec![
            Person {
                name: "Ann".into(),
                age: 30
            },
            Person {
                name: "Ben".into(),
                age: 41
            },
        ]
    );
}

#[test]
fn dynamic_agrees_with_cached() {
    let source = people_source();
    let cached: Vec<Person> = registry().map_cached(&source).unwrap();
    let dynamic: Vec<Person> = map_dynamic(&source).unwrap();
    assert_eq!(cached, dynamic);
}

#[test]
fn mapping_twice_yields_independent_equal_batches() {
    let registry = registry();
    let source = people_source();
    let first: Vec<Person> = registry.map_cached(&source).unwrap();
    let second: Vec<Person> = registry.map_cached(&source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn null_value_keeps_the_default() {
    let source = RowTable::with_rows(
        ["name", "age"],
        vec![vec![CellValue::Null, 30i64.into()]],
    )
    .unwrap();
    let people: Vec<Person> = registry().map_cached(&source).unwrap();
    assert_eq!(people[0].name, "");
    assert_eq!(people[0].age, 30);
}

#[test]
fn unknown_column_is_ignored() {
    let source = RowTable::with_rows(
        ["name", "age", "extra"],
        vec![vec!["Ann".into(), 30i64.into(), "ignored".into()]],
    )
    .unwrap();
    let people: Vec<Person> = registry().map_cached(&source).unwrap();
    assert_eq!(
        people[0],
        Person {
            name: "Ann".into(),
            age: 30
        }
    );
}

#[test]
fn field_without_a_column_keeps_the_default() {
    let people: Vec<Employee> = registry().map_cached(&people_source()).unwrap();
    assert_eq!(
        people[0],
        Employee {
            name: "Ann".into(),
            age: 30,
            note: String::new()
        }
    );
}

#[test]
fn type_mismatch_identifies_the_offending_value() {
    let source = RowTable::with_rows(["age"], vec![vec!["thirty".into()]]).unwrap();
    let err = registry().map_cached::<Person, _>(&source).unwrap_err();
    assert_eq!(
        err,
        BindError::FieldTypeMismatch {
            record_type: "Person",
            field: "age",
            declared: ValueKind::Int,
            actual: "Text",
            value: "thirty".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Person.age is a Int but the value in the row source is a Text. thirty"
    );
}

#[test]
fn int_does_not_fill_a_number_field() {
    // Exact kind match at the boundary: no implicit Int -> Number widening.
    let source = RowTable::with_rows(
        ["label", "value"],
        vec![vec!["t1".into(), CellValue::Int(3)]],
    )
    .unwrap();
    let err = registry().map_cached::<Reading, _>(&source).unwrap_err();
    match err {
        BindError::FieldTypeMismatch {
            field,
            declared,
            actual,
            ..
        } => {
            assert_eq!(field, "value");
            assert_eq!(declared, ValueKind::Number);
            assert_eq!(actual, "Int");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unregistered_type_produces_no_records() {
    let registry = BindingRegistry::new();
    let err = registry.map_cached::<Person, _>(&people_source()).unwrap_err();
    assert_eq!(err, BindError::UnregisteredType("Person"));
}

#[test]
fn duplicate_column_is_rejected_in_both_modes() {
    let source = RowTable::with_rows(
        ["age", "age"],
        vec![vec![1i64.into(), 2i64.into()]],
    )
    .unwrap();
    let cached = registry().map_cached::<Person, _>(&source).unwrap_err();
    let dynamic = map_dynamic::<Person, _>(&source).unwrap_err();
    assert_eq!(cached, BindError::DuplicateColumn("age".to_string()));
    assert_eq!(dynamic, cached);
}

#[test]
fn readonly_field_is_never_assigned() {
    let taken = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
    let source = RowTable::with_rows(
        ["label", "value", "taken", "active", "id"],
        vec![vec![
            "t1".into(),
            1.5f64.into(),
            taken.into(),
            true.into(),
            99i64.into(),
        ]],
    )
    .unwrap();
    let readings: Vec<Reading> = registry().map_cached(&source).unwrap();
    assert_eq!(
        readings[0],
        Reading {
            label: "t1".into(),
            value: 1.5,
            taken,
            active: true,
            id: 0,
        }
    );
}

#[test]
fn batch_of_one_matches_apply_single() {
    let registry = registry();
    let source = RowTable::with_rows(
        ["name", "age"],
        vec![vec!["Ann".into(), 30i64.into()]],
    )
    .unwrap();
    let batch: Vec<Person> = registry.map_cached(&source).unwrap();

    let mut single = Person::default();
    registry
        .bindings::<Person>()
        .unwrap()
        .apply_single(
            &mut single,
            &[
                ("name".to_string(), "Ann".into()),
                ("age".to_string(), 30i64.into()),
            ],
        )
        .unwrap();

    assert_eq!(batch[0], single);
}

#[test]
fn empty_source_maps_to_empty_batch() {
    let source = RowTable::new(["name", "age"]);
    let people: Vec<Person> = registry().map_cached(&source).unwrap();
    assert!(people.is_empty());
    let people: Vec<Person> = map_dynamic(&source).unwrap();
    assert!(people.is_empty());
}
